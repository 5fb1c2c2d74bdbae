//! Taxas CSV export for mineral oil tax refund claims.
//!
//! Produces the semicolon-separated document uploaded to the OFDF Taxas
//! portal: UTF-8 BOM, a fixed 17-column header, one line per fuel entry,
//! CRLF line endings, two-decimal numbers with a dot and ISO dates.
//!
//! # Example
//!
//! ```ignore
//! use taxas::export::*;
//!
//! let config = ExportConfigBuilder::new(2026, user_id).build();
//! let profile = TaxpayerProfile::new("CHE-123.456.788", "Bau AG", "Hauptstrasse 1, 3000 Bern");
//!
//! let document = to_taxas_csv(&records, &profile, &config)?;
//! let filename = export_filename(&config);
//! // respond with CSV_CONTENT_TYPE and document.as_bytes()
//! ```

mod codes;
mod document;
mod sanitize;
mod signature;
mod taxas_csv;

pub use codes::{
    OTHER_CODE, map_fuel_type_to_product_code, map_machine_type_to_code,
    map_raw_fuel_type_to_product_code,
};
pub use document::{
    DELIMITER, ExportDocument, HEADER_COLUMNS, LINE_END, TaxasExportRow, UTF8_BOM,
    generate_export_document,
};
pub use sanitize::sanitize_text;
pub use signature::{
    SIGNATURE_PREFIX, SIGNATURE_USER_CHARS, generate_technical_signature,
    generate_technical_signature_today,
};
pub use taxas_csv::{
    CSV_CONTENT_TYPE, ExportConfig, ExportConfigBuilder, build_export_rows, export_filename,
    to_taxas_csv,
};
