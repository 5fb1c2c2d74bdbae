#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let mut fields = s.splitn(4, '|');
        let input = taxas::core::FuelEntryInput {
            volume_liters: fields.next().unwrap_or_default().into(),
            invoice_date: fields.next().unwrap_or_default().into(),
            sector: fields.next().map(String::from),
            fuel_type: fields.next().unwrap_or_default().into(),
            ..Default::default()
        };
        let _ = input.validate();
        let _ = taxas::core::validate_uid(s);
    }
});
