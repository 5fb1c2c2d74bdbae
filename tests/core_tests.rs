use chrono::NaiveDate;
use rust_decimal_macros::dec;
use taxas::core::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn form_entry() -> FuelEntryInput {
    FuelEntryInput {
        volume_liters: "1'250,5".into(),
        invoice_date: "15.12.2025".into(),
        sector: Some("Agriculture-With-Direct-Payments".into()),
        fuel_type: "Diesel".into(),
        invoice_number: "LAN-88412".into(),
        machine_identifier: "FR 4711".into(),
        machine_type: "Tracteur".into(),
        remarks: Some("plein réservoir".into()),
    }
}

// --- Sector ---

#[test]
fn sector_parse_none_and_blank_are_unspecified() {
    assert_eq!(Sector::parse(None).unwrap(), Sector::Unspecified);
    assert_eq!(Sector::parse(Some("")).unwrap(), Sector::Unspecified);
    assert_eq!(Sector::parse(Some("   ")).unwrap(), Sector::Unspecified);
}

#[test]
fn sector_parse_aliases() {
    assert_eq!(Sector::parse(Some("BTP")).unwrap(), Sector::Construction);
    assert_eq!(Sector::parse(Some("other")).unwrap(), Sector::Construction);
    assert_eq!(
        Sector::parse(Some("agriculture without direct payments")).unwrap(),
        Sector::AgricultureWithoutDirectPayments
    );
}

#[test]
fn sector_parse_rejects_unknown() {
    let err = Sector::parse(Some("forestry")).unwrap_err();
    assert!(matches!(err, TaxasError::Input { field: "sector", .. }));
    assert!(err.to_string().contains("forestry"));
}

#[test]
fn sector_serde_names_match_codes() {
    for sector in Sector::ALL {
        let json = serde_json::to_string(&sector).unwrap();
        assert_eq!(json, format!("\"{}\"", sector.code()));
        let back: Sector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sector);
    }
    let btp: Sector = serde_json::from_str("\"btp\"").unwrap();
    assert_eq!(btp, Sector::Construction);
}

#[test]
fn record_without_sector_deserializes_as_unspecified() {
    let json = r#"{
        "volume_liters": "42.5",
        "invoice_date": "2026-02-01",
        "invoice_number": "A-1",
        "machine_identifier": "M1",
        "machine_type": "dumper",
        "fuel_type": "diesel",
        "remarks": null
    }"#;
    let record: FuelConsumptionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.sector, Sector::Unspecified);
    assert_eq!(record.volume_liters, dec!(42.5));
}

#[test]
fn record_with_null_sector_deserializes_as_unspecified() {
    let json = r#"{
        "volume_liters": "10",
        "invoice_date": "2026-02-01",
        "sector": null,
        "invoice_number": "A-2",
        "machine_identifier": "M1",
        "machine_type": "dumper",
        "fuel_type": "diesel",
        "remarks": null
    }"#;
    let record: FuelConsumptionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.sector, Sector::Unspecified);

    let json = json.replace(r#""sector": null"#, r#""sector": "btp""#);
    let record: FuelConsumptionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record.sector, Sector::Construction);
}

// --- Input boundary ---

#[test]
fn form_entry_validates() {
    let record = form_entry().validate().unwrap();
    assert_eq!(record.volume_liters, dec!(1250.5));
    assert_eq!(record.invoice_date, date(2025, 12, 15));
    assert_eq!(record.sector, Sector::AgricultureWithDirectPayments);
    assert_eq!(record.fuel_type, FuelType::Diesel);
    assert_eq!(record.remarks.as_deref(), Some("plein réservoir"));
}

#[test]
fn form_entry_with_missing_date_is_rejected() {
    let mut entry = form_entry();
    entry.invoice_date = String::new();
    let err = entry.validate().unwrap_err();
    assert!(matches!(err, TaxasError::Validation(_)));
    assert!(err.to_string().contains("invoice_date"));
}

#[test]
fn zero_volume_is_accepted() {
    let mut entry = form_entry();
    entry.volume_liters = "0".into();
    assert_eq!(entry.validate().unwrap().volume_liters, dec!(0));
}

#[test]
fn builder_rejects_negative_volume() {
    let result = FuelConsumptionRecordBuilder::new(dec!(-1), date(2026, 1, 1), FuelType::Diesel)
        .build();
    assert!(result.is_err());
}

#[test]
fn builder_unchecked_keeps_values() {
    let record = FuelConsumptionRecordBuilder::new(dec!(-1), date(2026, 1, 1), FuelType::Gasoline)
        .build_unchecked();
    assert_eq!(record.volume_liters, dec!(-1));
    assert_eq!(validate_record(&record).len(), 1);
}

#[test]
fn fuel_type_names() {
    assert_eq!(FuelType::parse("Benzin"), Some(FuelType::Gasoline));
    assert_eq!(FuelType::parse("BIODIESEL"), Some(FuelType::Biodiesel));
    assert_eq!(FuelType::parse("hydrogen"), None);
}

// --- UID ---

#[test]
fn taxpayer_uid_is_canonicalized() {
    assert_eq!(validate_uid("CHE123456788").unwrap(), "CHE-123.456.788");
    assert!(validate_uid("CHE-123.456.780").is_err());
}

// --- Rounding ---

#[test]
fn rounding_is_half_up_not_bankers() {
    // banker's rounding would give 0.12
    assert_eq!(round_chf(dec!(0.125)), dec!(0.13));
    assert_eq!(format_chf(dec!(2.675)), "2.68");
}
