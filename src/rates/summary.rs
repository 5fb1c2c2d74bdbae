//! Reimbursement totals for previews and dashboards.
//!
//! Line amounts stay unrounded; every total is accumulated from unrounded
//! values and rounded once when read through the `rounded_*` accessors.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::resolver::{calculate_reimbursement_by_sector_and_date, get_applicable_rate};
use crate::core::{FuelConsumptionRecord, Sector, round_chf};

/// A record with its resolved rate and unrounded amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReimbursementLine {
    pub invoice_date: NaiveDate,
    pub sector: Sector,
    pub volume_liters: Decimal,
    pub rate_per_litre: Decimal,
    /// Unrounded `volume_liters × rate_per_litre`.
    pub amount: Decimal,
}

impl ReimbursementLine {
    pub fn resolve(record: &FuelConsumptionRecord) -> Self {
        Self {
            invoice_date: record.invoice_date,
            sector: record.sector,
            volume_liters: record.volume_liters,
            rate_per_litre: get_applicable_rate(record.invoice_date, record.sector),
            amount: calculate_reimbursement_by_sector_and_date(
                record.volume_liters,
                record.invoice_date,
                record.sector,
            ),
        }
    }

    /// Amount rounded half up to the centime.
    pub fn rounded_amount(&self) -> Decimal {
        round_chf(self.amount)
    }
}

/// Per-sector accumulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectorTotal {
    pub entries: usize,
    pub liters: Decimal,
    /// Unrounded sum of line amounts.
    pub amount: Decimal,
}

/// Totals over a set of fuel entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReimbursementSummary {
    pub entries: usize,
    pub total_liters: Decimal,
    /// Unrounded sum of line amounts.
    pub total_amount: Decimal,
    /// Sum of the individually rounded line amounts, for reconciliation
    /// against exported rows.
    pub sum_of_rounded_lines: Decimal,
    pub by_sector: BTreeMap<Sector, SectorTotal>,
    /// A total exceeded the `Decimal` range and was clamped to its bound.
    pub saturated: bool,
}

impl ReimbursementSummary {
    /// Total refund rounded once, half up to the centime.
    pub fn rounded_total(&self) -> Decimal {
        round_chf(self.total_amount)
    }

    /// `rounded_total − sum_of_rounded_lines`.
    pub fn rounding_drift(&self) -> Decimal {
        self.rounded_total().saturating_sub(self.sum_of_rounded_lines)
    }
}

/// Resolve and total a set of records.
///
/// Never panics: totals beyond the `Decimal` range are clamped and flagged
/// in [`ReimbursementSummary::saturated`].
pub fn summarize(records: &[FuelConsumptionRecord]) -> ReimbursementSummary {
    let mut summary = ReimbursementSummary::default();
    let mut in_range = true;
    for record in records {
        let line = ReimbursementLine::resolve(record);
        summary.entries += 1;
        in_range &= accumulate(&mut summary.total_liters, line.volume_liters);
        in_range &= accumulate(&mut summary.total_amount, line.amount);
        in_range &= accumulate(&mut summary.sum_of_rounded_lines, line.rounded_amount());

        let sector = summary.by_sector.entry(line.sector).or_default();
        sector.entries += 1;
        in_range &= accumulate(&mut sector.liters, line.volume_liters);
        in_range &= accumulate(&mut sector.amount, line.amount);
    }
    if !in_range {
        tracing::warn!(
            entries = summary.entries,
            "reimbursement totals out of range, clamped"
        );
    }
    summary.saturated = !in_range;
    summary
}

/// Add `value` to `total`, clamping on overflow; false if it clamped.
fn accumulate(total: &mut Decimal, value: Decimal) -> bool {
    match total.checked_add(value) {
        Some(sum) => {
            *total = sum;
            true
        }
        None => {
            *total = total.saturating_add(value);
            false
        }
    }
}

/// Records whose invoice date falls in calendar year `fiscal_year`.
pub fn records_in_fiscal_year(
    records: &[FuelConsumptionRecord],
    fiscal_year: i32,
) -> Vec<&FuelConsumptionRecord> {
    records
        .iter()
        .filter(|r| r.invoice_date.year() == fiscal_year)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FuelConsumptionRecordBuilder, FuelType};
    use rust_decimal_macros::dec;

    fn record(volume: Decimal, y: i32, m: u32, d: u32, sector: Sector) -> FuelConsumptionRecord {
        FuelConsumptionRecordBuilder::new(
            volume,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            FuelType::Diesel,
        )
        .sector(sector)
        .build()
        .unwrap()
    }

    #[test]
    fn empty_summary() {
        let s = summarize(&[]);
        assert_eq!(s.entries, 0);
        assert_eq!(s.rounded_total(), dec!(0));
        assert!(s.by_sector.is_empty());
    }

    #[test]
    fn totals_by_sector() {
        let records = [
            record(dec!(500), 2026, 1, 5, Sector::AgricultureWithDirectPayments),
            record(dec!(500), 2026, 2, 5, Sector::Construction),
            record(dec!(100), 2026, 3, 5, Sector::Construction),
        ];
        let s = summarize(&records);
        assert_eq!(s.entries, 3);
        assert_eq!(s.total_liters, dec!(1100));
        assert_eq!(s.total_amount, dec!(300.25) + dec!(170.25) + dec!(34.05));
        assert_eq!(s.by_sector[&Sector::Construction].entries, 2);
        assert_eq!(s.by_sector[&Sector::Construction].liters, dec!(600));
    }

    #[test]
    fn total_is_rounded_once() {
        // 0.3405 × 0.5 = 0.17025 each: lines round to 0.17, total 0.34050 → 0.34
        let records: Vec<_> = (0..2)
            .map(|_| record(dec!(0.5), 2025, 5, 1, Sector::Unspecified))
            .collect();
        let s = summarize(&records);
        assert_eq!(s.total_amount, dec!(0.3405));
        assert_eq!(s.rounded_total(), dec!(0.34));
        assert_eq!(s.sum_of_rounded_lines, dec!(0.34));
        assert_eq!(s.rounding_drift(), dec!(0));
    }

    #[test]
    fn oversized_volumes_saturate_instead_of_panicking() {
        let huge = FuelConsumptionRecordBuilder::new(
            Decimal::MAX,
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            FuelType::Diesel,
        )
        .build_unchecked();
        let s = summarize(&[huge.clone(), huge]);
        assert_eq!(s.entries, 2);
        assert!(s.saturated);
        assert_eq!(s.total_liters, Decimal::MAX);
        assert_eq!(s.by_sector[&Sector::Unspecified].liters, Decimal::MAX);
        let _ = s.rounding_drift();
    }

    #[test]
    fn regular_totals_are_not_saturated() {
        let s = summarize(&[record(dec!(500), 2026, 1, 5, Sector::Construction)]);
        assert!(!s.saturated);
    }

    #[test]
    fn fiscal_year_filter() {
        let records = [
            record(dec!(1), 2025, 12, 31, Sector::Unspecified),
            record(dec!(1), 2026, 1, 1, Sector::Unspecified),
        ];
        let selected = records_in_fiscal_year(&records, 2026);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].invoice_date.year(), 2026);
    }
}
