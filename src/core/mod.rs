//! Core fuel entry types, input validation, and rounding.
//!
//! This module holds the values shared by rate resolution and export:
//! fuel consumption records, sectors, the taxpayer profile, the parsing
//! boundary for raw form input, and the CHF rounding policy.

mod builder;
mod error;
mod rounding;
mod types;
mod uid;
mod validation;

pub use builder::*;
pub use error::*;
pub use rounding::*;
pub use types::*;
pub use uid::validate_uid;
pub use validation::*;
