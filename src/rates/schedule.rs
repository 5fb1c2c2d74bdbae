//! Versioned refund rate schedule.
//!
//! The schedule ships with each release and never changes at runtime. A rate
//! change is a new [`RatePeriod`] plus a bump of [`RateSchedule::version`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::core::Sector;

/// Date from which agriculture with direct payments gets the bonified rate.
pub const AGRICULTURE_RATE_CHANGE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 1, 1) {
    Some(d) => d,
    None => panic!("invalid cutover date"),
};

/// General refund rate in CHF per litre, all sectors, all dates.
///
/// Pending product-owner confirmation against the OFDF directive: sources
/// disagree between 0.3405 and 0.3406. A correction is a new period plus a
/// schedule version bump.
pub const GENERAL_RATE: Decimal = dec!(0.3405);

/// Bonified refund rate in CHF per litre for agriculture with direct
/// payments, from [`AGRICULTURE_RATE_CHANGE_DATE`].
pub const AGRICULTURE_BONIFIED_RATE: Decimal = dec!(0.6005);

/// Which sectors a rate period applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RateScope {
    /// Every sector, including [`Sector::Unspecified`].
    AllSectors,
    /// One sector only; takes precedence over an `AllSectors` period.
    Only(Sector),
}

impl RateScope {
    fn matches(&self, sector: Sector) -> bool {
        match self {
            Self::AllSectors => true,
            Self::Only(s) => *s == sector,
        }
    }
}

/// A refund rate valid over a half-open date range `[valid_from, valid_until)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatePeriod {
    /// First day the rate applies; `None` means since forever.
    pub valid_from: Option<NaiveDate>,
    /// First day the rate no longer applies; `None` means open-ended.
    pub valid_until: Option<NaiveDate>,
    pub scope: RateScope,
    /// CHF per litre, four decimal places.
    pub rate_per_litre: Decimal,
    /// Short reference to the legal source of the rate.
    pub legal_basis: &'static str,
}

impl RatePeriod {
    /// Whether `date` falls inside this period.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.valid_from.is_none_or(|from| date >= from)
            && self.valid_until.is_none_or(|until| date < until)
    }
}

/// An immutable, versioned set of rate periods.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RateSchedule {
    pub version: &'static str,
    pub periods: &'static [RatePeriod],
}

const CURRENT_PERIODS: &[RatePeriod] = &[
    RatePeriod {
        valid_from: None,
        valid_until: None,
        scope: RateScope::AllSectors,
        rate_per_litre: GENERAL_RATE,
        legal_basis: "MinoStG art. 18 / MinoStV art. 30, general refund rate \
                      (0.3405 vs 0.3406 pending confirmation)",
    },
    RatePeriod {
        valid_from: Some(AGRICULTURE_RATE_CHANGE_DATE),
        valid_until: None,
        scope: RateScope::Only(Sector::AgricultureWithDirectPayments),
        rate_per_litre: AGRICULTURE_BONIFIED_RATE,
        legal_basis: "MinoStG art. 18 rev. 2026, agriculture with direct payments",
    },
];

impl RateSchedule {
    /// The schedule in force for this release.
    pub const CURRENT: RateSchedule = RateSchedule {
        version: "2026.1",
        periods: CURRENT_PERIODS,
    };

    /// The period that applies to `(date, sector)`.
    ///
    /// A sector-specific period beats an `AllSectors` one. Returns `None` only
    /// if no period covers the date at all.
    pub fn period_for(&self, date: NaiveDate, sector: Sector) -> Option<&'static RatePeriod> {
        let mut general = None;
        for period in self.periods {
            if !period.covers(date) || !period.scope.matches(sector) {
                continue;
            }
            match period.scope {
                RateScope::Only(_) => return Some(period),
                RateScope::AllSectors if general.is_none() => general = Some(period),
                RateScope::AllSectors => {}
            }
        }
        general
    }

    /// CHF-per-litre rate for `(date, sector)`.
    ///
    /// Total over all dates: falls back to [`GENERAL_RATE`] when no period
    /// covers the date.
    pub fn rate_for(&self, date: NaiveDate, sector: Sector) -> Decimal {
        self.period_for(date, sector)
            .map(|p| p.rate_per_litre)
            .unwrap_or(GENERAL_RATE)
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::CURRENT
    }
}
