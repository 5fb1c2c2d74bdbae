//! Mineral oil tax refund rates.
//!
//! Resolves the CHF-per-litre refund rate from the invoice date and the
//! declared sector, computes unrounded refund amounts, and totals them for
//! previews.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use taxas::core::Sector;
//! use taxas::rates::*;
//!
//! let before = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
//! let after = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
//!
//! assert_eq!(get_applicable_rate(before, Sector::AgricultureWithDirectPayments), dec!(0.3405));
//! assert_eq!(get_applicable_rate(after, Sector::AgricultureWithDirectPayments), dec!(0.6005));
//! assert_eq!(get_applicable_rate(after, Sector::Construction), GENERAL_RATE);
//! ```

mod resolver;
mod schedule;
mod summary;

pub use resolver::{
    calculate_reimbursement_by_sector_and_date, get_applicable_rate, rate_per_100_litres,
};
pub use schedule::{
    AGRICULTURE_BONIFIED_RATE, AGRICULTURE_RATE_CHANGE_DATE, GENERAL_RATE, RatePeriod, RateSchedule,
    RateScope,
};
pub use summary::{
    ReimbursementLine, ReimbursementSummary, SectorTotal, records_in_fiscal_year, summarize,
};
