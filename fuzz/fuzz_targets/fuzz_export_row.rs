#![no_main]

use libfuzzer_sys::fuzz_target;
use taxas::export::{TaxasExportRow, UTF8_BOM, generate_export_document};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let row = TaxasExportRow {
            reference_id: s.into(),
            taxpayer_name: s.into(),
            taxpayer_address: s.into(),
            machine_number: s.into(),
            remarks: s.into(),
            ..Default::default()
        };
        let doc = generate_export_document(&[row]);
        let body = doc.content.strip_prefix(UTF8_BOM).unwrap();
        for line in body.split_terminator("\r\n") {
            assert_eq!(line.split(';').count(), 17);
            assert!(!line.contains('\n') && !line.contains('\r'));
        }
    }
});
