//! # taxas
//!
//! Swiss mineral oil tax reimbursement for construction and agriculture
//! fleets: resolves the CHF-per-litre refund rate for a fuel entry and
//! serializes claims into the CSV layout accepted by the Taxas portal of the
//! Federal Office for Customs and Border Security (OFDF/BAZG).
//!
//! All rates and amounts use [`rust_decimal::Decimal`], never floating point.
//! Amounts are rounded once, half up to the centime, when they are formatted.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "rates")] {
//! use chrono::NaiveDate;
//! use taxas::core::*;
//! use taxas::rates::*;
//! use rust_decimal_macros::dec;
//!
//! let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
//! let amount = calculate_reimbursement_by_sector_and_date(
//!     dec!(500),
//!     date,
//!     Sector::AgricultureWithDirectPayments,
//! );
//! assert_eq!(round_chf(amount), dec!(300.25));
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Fuel entry types, input validation, UID check, rounding |
//! | `rates` | Rate schedule, rate resolution, reimbursement summaries |
//! | `export` | Taxas CSV export, code tables, technical signature |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "rates")]
pub mod rates;

#[cfg(feature = "export")]
pub mod export;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
