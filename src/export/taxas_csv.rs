//! Taxas claim export: configuration and projection of fuel entries to rows.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::codes::{map_fuel_type_to_product_code, map_machine_type_to_code};
use super::document::{ExportDocument, TaxasExportRow, generate_export_document};
use super::signature::generate_technical_signature;
use crate::core::{FuelConsumptionRecord, TaxasError, TaxpayerProfile, validate_uid};
use crate::rates::{calculate_reimbursement_by_sector_and_date, get_applicable_rate};

/// MIME type of the generated document.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Configuration for a Taxas export.
///
/// `fiscal_year` is required when deserializing; every other field has a
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Calendar year the claim covers.
    pub fiscal_year: i32,
    /// Authority slug used in the file name (e.g. "ofdf").
    #[serde(default = "default_authority")]
    pub authority: String,
    /// Product slug used in the file name.
    #[serde(default = "default_product")]
    pub product: String,
    /// Version of the OFDF directive the layout follows.
    #[serde(default = "default_directive_version")]
    pub directive_version: String,
    /// Origin declaration, French wording.
    #[serde(default = "default_origin_fr")]
    pub origin_declaration_fr: String,
    /// Origin declaration, German wording.
    #[serde(default = "default_origin_de")]
    pub origin_declaration_de: String,
    /// Identifier of the exporting user, used in the technical signature.
    #[serde(default)]
    pub user_id: String,
    /// Day stamped in the technical signature; `None` means today.
    #[serde(default)]
    pub signature_date: Option<NaiveDate>,
    /// Drop entries dated outside `fiscal_year`.
    #[serde(default = "default_restrict")]
    pub restrict_to_fiscal_year: bool,
}

fn default_authority() -> String {
    "ofdf".into()
}

fn default_product() -> String {
    "taxas".into()
}

fn default_directive_version() -> String {
    "R-09-2026.1".into()
}

fn default_origin_fr() -> String {
    "Carburant acquis et taxé en Suisse".into()
}

fn default_origin_de() -> String {
    "In der Schweiz bezogener und versteuerter Treibstoff".into()
}

fn default_restrict() -> bool {
    true
}

/// Builder for [`ExportConfig`].
///
/// # Example
///
/// ```
/// use taxas::export::ExportConfigBuilder;
/// use chrono::NaiveDate;
///
/// let config = ExportConfigBuilder::new(2026, "3f2b9c4e-81d0")
///     .signature_date(NaiveDate::from_ymd_opt(2026, 3, 9).unwrap())
///     .build();
/// assert_eq!(config.authority, "ofdf");
/// ```
pub struct ExportConfigBuilder {
    config: ExportConfig,
}

impl ExportConfigBuilder {
    /// Create a new builder with the required fiscal year and user id.
    pub fn new(fiscal_year: i32, user_id: impl Into<String>) -> Self {
        Self {
            config: ExportConfig {
                fiscal_year,
                authority: default_authority(),
                product: default_product(),
                directive_version: default_directive_version(),
                origin_declaration_fr: default_origin_fr(),
                origin_declaration_de: default_origin_de(),
                user_id: user_id.into(),
                signature_date: None,
                restrict_to_fiscal_year: default_restrict(),
            },
        }
    }

    pub fn authority(mut self, authority: impl Into<String>) -> Self {
        self.config.authority = authority.into();
        self
    }

    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.config.product = product.into();
        self
    }

    pub fn directive_version(mut self, version: impl Into<String>) -> Self {
        self.config.directive_version = version.into();
        self
    }

    /// Set both origin declarations (French, German).
    pub fn origin_declarations(mut self, fr: impl Into<String>, de: impl Into<String>) -> Self {
        self.config.origin_declaration_fr = fr.into();
        self.config.origin_declaration_de = de.into();
        self
    }

    /// Pin the signature day instead of using the current date.
    pub fn signature_date(mut self, date: NaiveDate) -> Self {
        self.config.signature_date = Some(date);
        self
    }

    pub fn restrict_to_fiscal_year(mut self, restrict: bool) -> Self {
        self.config.restrict_to_fiscal_year = restrict;
        self
    }

    pub fn build(self) -> ExportConfig {
        self.config
    }
}

/// Download file name: `export_<product>_<fiscalYear>_directives_<authority>.csv`.
pub fn export_filename(config: &ExportConfig) -> String {
    format!(
        "export_{}_{}_directives_{}.csv",
        slug(&config.product),
        config.fiscal_year,
        slug(&config.authority)
    )
}

/// Project fuel entries onto export rows, resolving rate and amount.
///
/// The reference is the invoice number, or `<fiscal year>-<position>` when
/// the entry has none.
pub fn build_export_rows<'a, I>(
    records: I,
    profile: &TaxpayerProfile,
    config: &ExportConfig,
) -> Vec<TaxasExportRow>
where
    I: IntoIterator<Item = &'a FuelConsumptionRecord>,
{
    let signature_date = config
        .signature_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let signature = generate_technical_signature(&config.user_id, signature_date);
    let fiscal_period = config.fiscal_year.to_string();

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let reference_id = if record.invoice_number.trim().is_empty() {
                format!("{}-{:04}", config.fiscal_year, i + 1)
            } else {
                record.invoice_number.clone()
            };
            TaxasExportRow {
                reference_id,
                taxpayer_uid: profile.uid.clone(),
                taxpayer_name: profile.name.clone(),
                taxpayer_address: profile.address.clone(),
                machine_code: map_machine_type_to_code(&record.machine_type).to_string(),
                machine_number: record.machine_identifier.clone(),
                product_code: map_fuel_type_to_product_code(record.fuel_type).to_string(),
                consumption_date: Some(record.invoice_date),
                quantity_liters: Some(record.volume_liters),
                rate_chf_per_liter: Some(get_applicable_rate(record.invoice_date, record.sector)),
                amount_chf: Some(calculate_reimbursement_by_sector_and_date(
                    record.volume_liters,
                    record.invoice_date,
                    record.sector,
                )),
                fiscal_period: fiscal_period.clone(),
                origin_declaration_fr: config.origin_declaration_fr.clone(),
                origin_declaration_de: config.origin_declaration_de.clone(),
                directive_version: config.directive_version.clone(),
                technical_signature: signature.clone(),
                remarks: record.remarks.clone().unwrap_or_default(),
            }
        })
        .collect()
}

/// Generate the Taxas CSV for one taxpayer and fiscal year.
///
/// Checks the taxpayer UID (written in canonical form), drops entries outside
/// the fiscal year when configured to, and orders rows by date then invoice
/// number. No eligible entries yield a header-only document.
pub fn to_taxas_csv(
    records: &[FuelConsumptionRecord],
    profile: &TaxpayerProfile,
    config: &ExportConfig,
) -> Result<ExportDocument, TaxasError> {
    if profile.name.trim().is_empty() {
        return Err(TaxasError::Export("taxpayer name is required".into()));
    }
    let profile = TaxpayerProfile {
        uid: validate_uid(&profile.uid)?,
        ..profile.clone()
    };

    let mut selected: Vec<&FuelConsumptionRecord> = records
        .iter()
        .filter(|r| !config.restrict_to_fiscal_year || r.invoice_date.year() == config.fiscal_year)
        .collect();
    let excluded = records.len() - selected.len();
    if excluded > 0 {
        tracing::warn!(
            excluded,
            fiscal_year = config.fiscal_year,
            "fuel entries outside the fiscal year left out of the export"
        );
    }
    selected.sort_by(|a, b| {
        a.invoice_date
            .cmp(&b.invoice_date)
            .then_with(|| a.invoice_number.cmp(&b.invoice_number))
    });

    let rows = build_export_rows(selected, &profile, config);
    let document = generate_export_document(&rows);
    tracing::debug!(
        rows = document.row_count,
        degraded = document.degraded_rows,
        fiscal_year = config.fiscal_year,
        "taxas export generated"
    );
    Ok(document)
}

fn slug(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
