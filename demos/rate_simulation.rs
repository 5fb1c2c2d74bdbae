use chrono::NaiveDate;
use rust_decimal_macros::dec;
use taxas::core::*;
use taxas::rates::*;

fn main() {
    let dates = [
        NaiveDate::from_ymd_opt(2025, 12, 15).expect("valid date"),
        NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date"),
    ];
    let volume = dec!(500);

    println!("Rate schedule {}", RateSchedule::CURRENT.version);
    for period in RateSchedule::CURRENT.periods {
        println!(
            "  {:?} from {:?}: {} CHF/100L ({})",
            period.scope,
            period.valid_from,
            rate_per_100_litres(period.rate_per_litre),
            period.legal_basis
        );
    }

    println!("\nRefund for {volume} L:");
    for date in dates {
        for sector in Sector::ALL {
            let amount = calculate_reimbursement_by_sector_and_date(volume, date, sector);
            println!(
                "  {date} {:<36} rate {} → CHF {}",
                sector.code(),
                get_applicable_rate(date, sector),
                format_chf(amount)
            );
        }
    }
}
