use chrono::{Duration, NaiveDate};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use taxas::core::*;
use taxas::export;
use taxas::rates;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

/// One fiscal year of daily refuelling for a mixed fleet.
fn build_fleet_year() -> Vec<FuelConsumptionRecord> {
    let machines = ["pelle", "chargeuse", "tracteur", "dumper", "grue"];
    (0..365)
        .map(|day| {
            let sector = if day % 3 == 0 {
                Sector::AgricultureWithDirectPayments
            } else {
                Sector::Construction
            };
            FuelConsumptionRecordBuilder::new(
                Decimal::new(12_000 + day * 7, 2),
                start_date() + Duration::days(day),
                FuelType::Diesel,
            )
            .sector(sector)
            .invoice_number(format!("F-2026-{day:04}"))
            .machine(format!("VD {}", 1000 + day % 5), machines[(day % 5) as usize])
            .remarks("Chantier; Lausanne\nOuest")
            .build()
            .unwrap()
        })
        .collect()
}

fn profile() -> TaxpayerProfile {
    TaxpayerProfile::new("CHE-123.456.788", "Bench Bau SA", "Route de Genève 1\n1004 Lausanne")
}

fn config() -> export::ExportConfig {
    export::ExportConfigBuilder::new(2026, "bench-user")
        .signature_date(start_date())
        .build()
}

fn bench_rate_lookup(c: &mut Criterion) {
    let date = start_date();
    c.bench_function("get_applicable_rate", |b| {
        b.iter(|| {
            black_box(rates::get_applicable_rate(
                black_box(date),
                black_box(Sector::AgricultureWithDirectPayments),
            ))
        });
    });
}

fn bench_summarize(c: &mut Criterion) {
    let records = build_fleet_year();
    c.bench_function("summarize_365_entries", |b| {
        b.iter(|| black_box(rates::summarize(black_box(&records))));
    });
}

fn bench_sanitize(c: &mut Criterion) {
    let text = "Müller; Bau\r\nAG;\n\n  Zürich  ".repeat(20);
    c.bench_function("sanitize_text", |b| {
        b.iter(|| black_box(export::sanitize_text(black_box(&text))));
    });
}

fn bench_taxas_export(c: &mut Criterion) {
    let records = build_fleet_year();
    let profile = profile();
    let config = config();
    c.bench_function("taxas_csv_365_entries", |b| {
        b.iter(|| {
            black_box(export::to_taxas_csv(
                black_box(&records),
                black_box(&profile),
                black_box(&config),
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_rate_lookup,
    bench_summarize,
    bench_sanitize,
    bench_taxas_export,
);
criterion_main!(benches);
