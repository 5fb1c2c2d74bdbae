use chrono::NaiveDate;
use taxas::core::*;
use taxas::export::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    // Entries as they arrive from the entry form
    let inputs = [
        FuelEntryInput {
            volume_liters: "500".into(),
            invoice_date: "2026-01-05".into(),
            sector: Some("agriculture_with_direct_payments".into()),
            fuel_type: "diesel".into(),
            invoice_number: "LANDI-88412".into(),
            machine_identifier: "FR 4711".into(),
            machine_type: "Tracteur".into(),
            remarks: None,
        },
        FuelEntryInput {
            volume_liters: "1'250,5".into(),
            invoice_date: "10.02.2026".into(),
            sector: Some("btp".into()),
            fuel_type: "diesel".into(),
            invoice_number: "AVIA-2026-17".into(),
            machine_identifier: "VD 1002".into(),
            machine_type: "Pelle hydraulique".into(),
            remarks: Some("Chantier Ouest;\nlot 3".into()),
        },
        FuelEntryInput {
            volume_liters: "-20".into(),
            invoice_date: "2026-13-01".into(),
            fuel_type: "diesel".into(),
            ..Default::default()
        },
    ];

    let mut records = Vec::new();
    for input in &inputs {
        match input.validate() {
            Ok(record) => records.push(record),
            Err(e) => println!("rejected entry: {e}"),
        }
    }

    let profile = TaxpayerProfile::new(
        "CHE-123.456.788",
        "Favre Terrassement SA",
        "Chemin des Vignes 4\n1009 Pully",
    );
    let config = ExportConfigBuilder::new(2026, "3f2b9c4e-81d0-4a7b-9f11-0c2d3e4f5a6b")
        .signature_date(NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date"))
        .build();

    let document = to_taxas_csv(&records, &profile, &config).expect("taxas export failed");
    println!("=== {} ({CSV_CONTENT_TYPE}) ===", export_filename(&config));
    for (i, line) in document.content.split_terminator("\r\n").enumerate() {
        println!("Line {}: {}", i + 1, line.trim_start_matches(UTF8_BOM));
    }
    println!(
        "... {} rows, {} degraded, {} bytes total",
        document.row_count,
        document.degraded_rows,
        document.as_bytes().len()
    );
}
