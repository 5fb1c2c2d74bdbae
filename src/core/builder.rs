use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::{TaxasError, collect_errors};
use super::types::*;
use super::validation;

/// Builder for validated fuel consumption records.
///
/// ```
/// use taxas::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let record = FuelConsumptionRecordBuilder::new(
///     dec!(500),
///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     FuelType::Diesel,
/// )
/// .sector(Sector::AgricultureWithDirectPayments)
/// .invoice_number("F-2026-0042")
/// .machine("VD 12345", "tracteur")
/// .build()
/// .unwrap();
///
/// assert_eq!(record.machine_type, "tracteur");
/// ```
pub struct FuelConsumptionRecordBuilder {
    volume_liters: Decimal,
    invoice_date: NaiveDate,
    fuel_type: FuelType,
    sector: Sector,
    invoice_number: String,
    machine_identifier: String,
    machine_type: String,
    remarks: Option<String>,
}

impl FuelConsumptionRecordBuilder {
    pub fn new(volume_liters: Decimal, invoice_date: NaiveDate, fuel_type: FuelType) -> Self {
        Self {
            volume_liters,
            invoice_date,
            fuel_type,
            sector: Sector::Unspecified,
            invoice_number: String::new(),
            machine_identifier: String::new(),
            machine_type: String::new(),
            remarks: None,
        }
    }

    pub fn sector(mut self, sector: Sector) -> Self {
        self.sector = sector;
        self
    }

    pub fn invoice_number(mut self, number: impl Into<String>) -> Self {
        self.invoice_number = number.into();
        self
    }

    /// Set the machine identifier and its free-text type.
    pub fn machine(mut self, identifier: impl Into<String>, machine_type: impl Into<String>) -> Self {
        self.machine_identifier = identifier.into();
        self.machine_type = machine_type.into();
        self
    }

    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Build and validate the record.
    pub fn build(self) -> Result<FuelConsumptionRecord, TaxasError> {
        let record = self.build_unchecked();
        collect_errors(validation::validate_record(&record))?;
        Ok(record)
    }

    /// Build without validation, for importing already-checked data.
    pub fn build_unchecked(self) -> FuelConsumptionRecord {
        FuelConsumptionRecord {
            volume_liters: self.volume_liters,
            invoice_date: self.invoice_date,
            sector: self.sector,
            invoice_number: self.invoice_number,
            machine_identifier: self.machine_identifier,
            machine_type: self.machine_type,
            fuel_type: self.fuel_type,
            remarks: self.remarks,
        }
    }
}
