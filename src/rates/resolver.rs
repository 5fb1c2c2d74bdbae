//! Refund rate resolution.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::schedule::RateSchedule;
use crate::core::Sector;

/// CHF-per-litre refund rate for an invoice date and declared sector.
///
/// Agriculture with direct payments gets the bonified rate on and after
/// 1 January 2026; every other combination gets the general rate. Pure and
/// total: identical inputs always yield the identical `Decimal`.
pub fn get_applicable_rate(date: NaiveDate, sector: Sector) -> Decimal {
    RateSchedule::CURRENT.rate_for(date, sector)
}

/// Unrounded refund amount in CHF: `volume_liters × rate`.
///
/// The caller guarantees a non-negative volume (see
/// [`parse_volume`](crate::core::parse_volume)). Round with
/// [`round_chf`](crate::core::round_chf) only when displaying or exporting.
pub fn calculate_reimbursement_by_sector_and_date(
    volume_liters: Decimal,
    date: NaiveDate,
    sector: Sector,
) -> Decimal {
    volume_liters * get_applicable_rate(date, sector)
}

/// Express a CHF-per-litre rate as CHF per 100 litres, the unit used on
/// OFDF forms (0.3405 → 34.05).
pub fn rate_per_100_litres(rate: Decimal) -> Decimal {
    rate * Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::round_chf;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn general_rate_before_cutover() {
        for sector in Sector::ALL {
            assert_eq!(get_applicable_rate(date(2025, 12, 31), sector), dec!(0.3405));
        }
    }

    #[test]
    fn bonified_rate_from_cutover() {
        assert_eq!(
            get_applicable_rate(date(2026, 1, 1), Sector::AgricultureWithDirectPayments),
            dec!(0.6005)
        );
        assert_eq!(
            get_applicable_rate(date(2026, 1, 1), Sector::AgricultureWithoutDirectPayments),
            dec!(0.3405)
        );
    }

    #[test]
    fn amount_is_not_rounded() {
        let amount = calculate_reimbursement_by_sector_and_date(
            dec!(123.45),
            date(2025, 6, 1),
            Sector::Construction,
        );
        assert_eq!(amount, dec!(42.034725));
        assert_eq!(round_chf(amount), dec!(42.03));
    }

    #[test]
    fn per_100_litres() {
        assert_eq!(rate_per_100_litres(dec!(0.3405)), dec!(34.05));
        assert_eq!(rate_per_100_litres(dec!(0.6005)), dec!(60.05));
    }
}
