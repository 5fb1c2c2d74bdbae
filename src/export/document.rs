//! Taxas CSV document formatting.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sanitize::sanitize_text;
use crate::core::format_chf;

/// UTF-8 byte order mark written at the start of every document.
pub const UTF8_BOM: &str = "\u{feff}";

/// Field delimiter.
pub const DELIMITER: char = ';';

/// Line terminator of every line, header included.
pub const LINE_END: &str = "\r\n";

/// Column names of the header line, in output order.
pub const HEADER_COLUMNS: [&str; 17] = [
    "Reference",
    "UID_Contribuable",
    "Nom_Contribuable",
    "Adresse",
    "Code_Machine",
    "Numero_Machine",
    "Code_Produit",
    "Date_Consommation",
    "Quantite_Litres",
    "Taux_CHF_L",
    "Montant_Remboursable_CHF",
    "Periode_Fiscale",
    "Declaration_Origine_FR",
    "Herkunftsdeklaration_DE",
    "Version_Directive",
    "Signature_Technique",
    "Remarques",
];

/// One line of the export, projected from a fuel entry at export time.
///
/// Text fields may hold raw user input; they are sanitized when written.
/// The optional fields are always filled by
/// [`build_export_rows`](super::build_export_rows); a `None` is written as
/// an empty field and counted as degraded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxasExportRow {
    pub reference_id: String,
    pub taxpayer_uid: String,
    pub taxpayer_name: String,
    pub taxpayer_address: String,
    pub machine_code: String,
    pub machine_number: String,
    pub product_code: String,
    pub consumption_date: Option<NaiveDate>,
    pub quantity_liters: Option<Decimal>,
    pub rate_chf_per_liter: Option<Decimal>,
    /// Unrounded refund amount; rounded half up when written.
    pub amount_chf: Option<Decimal>,
    pub fiscal_period: String,
    pub origin_declaration_fr: String,
    pub origin_declaration_de: String,
    pub directive_version: String,
    pub technical_signature: String,
    pub remarks: String,
}

/// A generated export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// Full document text, BOM included.
    pub content: String,
    /// Number of data lines.
    pub row_count: usize,
    /// Data lines with at least one field left empty for lack of a value.
    pub degraded_rows: usize,
}

impl ExportDocument {
    /// The document as UTF-8 bytes, ready for a `text/csv` response body.
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// True when the document holds the header line only.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

/// Serialize export rows into a Taxas CSV document.
///
/// Never fails: an empty slice yields BOM + header, and a row with a missing
/// date or number gets an empty field for it, a `warn` log event and a
/// count in [`ExportDocument::degraded_rows`].
pub fn generate_export_document(rows: &[TaxasExportRow]) -> ExportDocument {
    let mut out = String::with_capacity(256 + rows.len() * 256);
    out.push_str(UTF8_BOM);
    out.push_str(&HEADER_COLUMNS.join(";"));
    out.push_str(LINE_END);

    let mut degraded_rows = 0;
    for (index, row) in rows.iter().enumerate() {
        let missing = write_row(&mut out, row);
        if !missing.is_empty() {
            degraded_rows += 1;
            tracing::warn!(
                row = index + 1,
                reference = %row.reference_id,
                missing = ?missing,
                "export row has missing values, writing empty fields"
            );
        }
    }

    ExportDocument {
        content: out,
        row_count: rows.len(),
        degraded_rows,
    }
}

/// Append one data line; returns the names of the fields left empty.
fn write_row(out: &mut String, row: &TaxasExportRow) -> Vec<&'static str> {
    let mut missing = Vec::new();

    let text = |out: &mut String, value: &str| {
        out.push_str(&sanitize_text(value));
        out.push(DELIMITER);
    };
    text(out, &row.reference_id);
    text(out, &row.taxpayer_uid);
    text(out, &row.taxpayer_name);
    text(out, &row.taxpayer_address);
    text(out, &row.machine_code);
    text(out, &row.machine_number);
    text(out, &row.product_code);

    match row.consumption_date {
        Some(d) => out.push_str(&d.format("%Y-%m-%d").to_string()),
        None => missing.push("consumption_date"),
    }
    out.push(DELIMITER);

    for (name, value) in [
        ("quantity_liters", row.quantity_liters),
        ("rate_chf_per_liter", row.rate_chf_per_liter),
        ("amount_chf", row.amount_chf),
    ] {
        match value {
            Some(v) => out.push_str(&format_chf(v)),
            None => missing.push(name),
        }
        out.push(DELIMITER);
    }

    text(out, &row.fiscal_period);
    text(out, &row.origin_declaration_fr);
    text(out, &row.origin_declaration_de);
    text(out, &row.directive_version);
    text(out, &row.technical_signature);
    out.push_str(&sanitize_text(&row.remarks));
    out.push_str(LINE_END);

    missing
}
