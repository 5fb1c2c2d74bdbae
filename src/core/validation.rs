use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::{TaxasError, ValidationError, collect_errors};
use super::types::*;

/// Largest volume accepted for a single fuel entry, in litres.
pub const MAX_VOLUME_PER_ENTRY: Decimal = dec!(1_000_000);

/// Longest accepted identifier (invoice number, machine identifier).
pub const MAX_IDENTIFIER_LEN: usize = 200;

/// Longest accepted remark.
pub const MAX_REMARKS_LEN: usize = 1_000;

/// Validate a fuel consumption record.
/// Returns all validation errors found (not just the first).
pub fn validate_record(record: &FuelConsumptionRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if record.volume_liters < Decimal::ZERO {
        errors.push(ValidationError::new(
            "volume_liters",
            format!("volume must not be negative, got {}", record.volume_liters),
        ));
    } else if record.volume_liters > MAX_VOLUME_PER_ENTRY {
        errors.push(ValidationError::new(
            "volume_liters",
            format!(
                "volume {} exceeds the per-entry limit of {MAX_VOLUME_PER_ENTRY} L",
                record.volume_liters
            ),
        ));
    }

    for (field, value) in [
        ("invoice_number", &record.invoice_number),
        ("machine_identifier", &record.machine_identifier),
        ("machine_type", &record.machine_type),
    ] {
        if value.chars().count() > MAX_IDENTIFIER_LEN {
            errors.push(ValidationError::new(
                field,
                format!("must not exceed {MAX_IDENTIFIER_LEN} characters"),
            ));
        }
    }

    if let Some(remarks) = &record.remarks {
        if remarks.chars().count() > MAX_REMARKS_LEN {
            errors.push(ValidationError::new(
                "remarks",
                format!("must not exceed {MAX_REMARKS_LEN} characters"),
            ));
        }
    }

    errors
}

/// Parse an invoice date given as `YYYY-MM-DD` or Swiss `DD.MM.YYYY`.
pub fn parse_invoice_date(raw: &str) -> Result<NaiveDate, TaxasError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TaxasError::input("invoice_date", "date is required"));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d.%m.%Y"))
        .map_err(|_| TaxasError::input("invoice_date", format!("'{raw}' is not a valid date")))
}

/// Parse a volume in litres.
///
/// Accepts `.` or `,` as decimal separator and ignores Swiss thousands
/// separators (`1'250.5`) and spaces. Negative, empty and non-numeric values
/// (including `NaN` and `inf`) are rejected.
pub fn parse_volume(raw: &str) -> Result<Decimal, TaxasError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}' | ' ' | '\u{a0}'))
        .collect();
    if cleaned.is_empty() {
        return Err(TaxasError::input("volume_liters", "volume is required"));
    }

    let normalized = match (cleaned.contains('.'), cleaned.contains(',')) {
        (true, true) => {
            return Err(TaxasError::input(
                "volume_liters",
                format!("'{raw}' mixes ',' and '.' separators"),
            ));
        }
        (false, true) => cleaned.replace(',', "."),
        _ => cleaned,
    };

    let value = Decimal::from_str(&normalized).map_err(|_| {
        TaxasError::input("volume_liters", format!("'{raw}' is not a number"))
    })?;
    if value < Decimal::ZERO {
        return Err(TaxasError::input(
            "volume_liters",
            format!("'{raw}' must not be negative"),
        ));
    }
    Ok(value)
}

/// A fuel entry as submitted by a form or read from a database row,
/// before any parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelEntryInput {
    pub volume_liters: String,
    pub invoice_date: String,
    pub sector: Option<String>,
    pub fuel_type: String,
    pub invoice_number: String,
    pub machine_identifier: String,
    pub machine_type: String,
    pub remarks: Option<String>,
}

impl FuelEntryInput {
    /// Parse and validate every field, reporting all problems at once.
    pub fn validate(&self) -> Result<FuelConsumptionRecord, TaxasError> {
        let mut errors = Vec::new();

        let volume = parse_volume(&self.volume_liters)
            .map_err(|e| errors.push(input_error(e)))
            .ok();
        let date = parse_invoice_date(&self.invoice_date)
            .map_err(|e| errors.push(input_error(e)))
            .ok();
        let sector = Sector::parse(self.sector.as_deref())
            .map_err(|e| errors.push(input_error(e)))
            .ok();
        let fuel_type = FuelType::parse(&self.fuel_type);
        if fuel_type.is_none() {
            errors.push(ValidationError::new(
                "fuel_type",
                format!("unrecognized fuel type '{}'", self.fuel_type.trim()),
            ));
        }

        let (Some(volume_liters), Some(invoice_date), Some(sector), Some(fuel_type)) =
            (volume, date, sector, fuel_type)
        else {
            collect_errors(errors)?;
            return Err(TaxasError::Validation("incomplete fuel entry".into()));
        };

        let record = FuelConsumptionRecord {
            volume_liters,
            invoice_date,
            sector,
            invoice_number: self.invoice_number.trim().to_string(),
            machine_identifier: self.machine_identifier.trim().to_string(),
            machine_type: self.machine_type.trim().to_string(),
            fuel_type,
            remarks: self
                .remarks
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from),
        };
        errors.extend(validate_record(&record));
        collect_errors(errors)?;
        Ok(record)
    }
}

fn input_error(err: TaxasError) -> ValidationError {
    match err {
        TaxasError::Input { field, message } => ValidationError::new(field, message),
        other => ValidationError::new("input", other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> FuelEntryInput {
        FuelEntryInput {
            volume_liters: "500".into(),
            invoice_date: "2026-01-05".into(),
            sector: Some("agriculture_with_direct_payments".into()),
            fuel_type: "diesel".into(),
            invoice_number: " F-1 ".into(),
            machine_identifier: "VD 12345".into(),
            machine_type: "tracteur".into(),
            remarks: Some("  ".into()),
        }
    }

    #[test]
    fn parse_volume_accepts_swiss_formats() {
        assert_eq!(parse_volume("500").unwrap(), dec!(500));
        assert_eq!(parse_volume("1'250.50").unwrap(), dec!(1250.50));
        assert_eq!(parse_volume("12,5").unwrap(), dec!(12.5));
        assert_eq!(parse_volume(" 0 ").unwrap(), dec!(0));
    }

    #[test]
    fn parse_volume_rejects_garbage() {
        assert!(parse_volume("").is_err());
        assert!(parse_volume("NaN").is_err());
        assert!(parse_volume("inf").is_err());
        assert!(parse_volume("-3").is_err());
        assert!(parse_volume("1.000,5").is_err());
    }

    #[test]
    fn parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(parse_invoice_date("2026-01-05").unwrap(), expected);
        assert_eq!(parse_invoice_date("05.01.2026").unwrap(), expected);
        assert!(parse_invoice_date("2026-02-30").is_err());
        assert!(parse_invoice_date("").is_err());
    }

    #[test]
    fn valid_input_trims_fields() {
        let record = input().validate().unwrap();
        assert_eq!(record.invoice_number, "F-1");
        assert_eq!(record.remarks, None);
        assert_eq!(record.sector, Sector::AgricultureWithDirectPayments);
    }

    #[test]
    fn invalid_input_reports_every_field() {
        let mut bad = input();
        bad.volume_liters = "-1".into();
        bad.invoice_date = "yesterday".into();
        bad.sector = Some("forestry".into());
        bad.fuel_type = "kerosene".into();
        let msg = bad.validate().unwrap_err().to_string();
        assert!(msg.contains("volume_liters"), "{msg}");
        assert!(msg.contains("invoice_date"), "{msg}");
        assert!(msg.contains("sector"), "{msg}");
        assert!(msg.contains("fuel_type"), "{msg}");
    }

    #[test]
    fn record_limits() {
        let mut record = input().validate().unwrap();
        record.volume_liters = dec!(1_000_001);
        record.invoice_number = "x".repeat(201);
        let errors = validate_record(&record);
        assert_eq!(errors.len(), 2);
    }
}
