use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::TaxasError;

/// Economic activity declared by the fleet operator.
///
/// Determines eligibility for the bonified agricultural rate from
/// 1 January 2026. `Unspecified` is the explicit "no override" value and
/// always resolves to the general rate.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    /// Agriculture with federal direct payments (bonified from 2026).
    AgricultureWithDirectPayments,
    /// Agriculture without direct payments.
    AgricultureWithoutDirectPayments,
    /// Construction (BTP) and any other declared activity.
    #[serde(alias = "btp", alias = "other")]
    Construction,
    /// No sector declared.
    #[default]
    Unspecified,
}

impl Sector {
    /// All variants, in declaration order.
    pub const ALL: [Sector; 4] = [
        Sector::AgricultureWithDirectPayments,
        Sector::AgricultureWithoutDirectPayments,
        Sector::Construction,
        Sector::Unspecified,
    ];

    /// Canonical snake_case code, identical to the serde representation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AgricultureWithDirectPayments => "agriculture_with_direct_payments",
            Self::AgricultureWithoutDirectPayments => "agriculture_without_direct_payments",
            Self::Construction => "construction",
            Self::Unspecified => "unspecified",
        }
    }

    /// Parse a loosely-typed sector value coming from a form or database row.
    ///
    /// `None`, an empty string or whitespace yield [`Sector::Unspecified`].
    /// Matching is case-insensitive and treats `-` and spaces like `_`.
    pub fn parse(raw: Option<&str>) -> Result<Self, TaxasError> {
        let Some(raw) = raw else {
            return Ok(Self::Unspecified);
        };
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "" | "unspecified" | "none" => Ok(Self::Unspecified),
            "agriculture_with_direct_payments" => Ok(Self::AgricultureWithDirectPayments),
            "agriculture_without_direct_payments" => Ok(Self::AgricultureWithoutDirectPayments),
            "construction" | "btp" | "other" => Ok(Self::Construction),
            _ => Err(TaxasError::input(
                "sector",
                format!("unrecognized sector '{}'", raw.trim()),
            )),
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Fuel type of a consumption entry.
///
/// Has no influence on the refund rate under the current rules, but selects
/// the product code written to the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Diesel,
    Gasoline,
    Biodiesel,
}

impl FuelType {
    /// Parse a fuel type name (English, French or German). Case-insensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "diesel" | "gasoil" | "gazole" => Some(Self::Diesel),
            "gasoline" | "petrol" | "essence" | "benzin" => Some(Self::Gasoline),
            "biodiesel" | "bio_diesel" | "bio-diesel" => Some(Self::Biodiesel),
            _ => None,
        }
    }
}

/// A single fuel purchase attributed to a machine.
///
/// Created through [`FuelConsumptionRecordBuilder`](super::FuelConsumptionRecordBuilder)
/// or [`FuelEntryInput::validate`](super::FuelEntryInput::validate), which
/// guarantee a non-negative volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelConsumptionRecord {
    /// Litres of fuel.
    pub volume_liters: Decimal,
    /// Invoice date; selects the applicable rate.
    pub invoice_date: NaiveDate,
    /// Declared sector of the operator; missing or `null` is `Unspecified`.
    #[serde(default, deserialize_with = "sector_or_unspecified")]
    pub sector: Sector,
    /// Supplier invoice number.
    pub invoice_number: String,
    /// Machine identifier (plate, serial or fleet number).
    pub machine_identifier: String,
    /// Machine type as entered by the user (mapped to a code on export).
    pub machine_type: String,
    /// Fuel type.
    pub fuel_type: FuelType,
    /// Free-text remarks.
    pub remarks: Option<String>,
}

fn sector_or_unspecified<'de, D>(deserializer: D) -> Result<Sector, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Sector>::deserialize(deserializer)?.unwrap_or_default())
}

/// Taxpayer identity written into every export row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerProfile {
    /// Swiss enterprise identification number (e.g. "CHE-123.456.788").
    pub uid: String,
    /// Company name.
    pub name: String,
    /// Postal address on one or more lines.
    pub address: String,
}

impl TaxpayerProfile {
    pub fn new(uid: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            address: address.into(),
        }
    }
}
