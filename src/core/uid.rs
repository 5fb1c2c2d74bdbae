//! Swiss enterprise identification number (UID) format check.

use super::error::TaxasError;

/// Weights of the mod-11 check digit over the first eight UID digits.
const UID_WEIGHTS: [u32; 8] = [5, 4, 3, 2, 7, 6, 5, 4];

/// Validate a Swiss UID and return its canonical form `CHE-XXX.XXX.XXX`.
///
/// Accepts the common spellings (`CHE-123.456.788`, `CHE123456788`,
/// `che 123 456 788`) and an optional `MWST`/`TVA`/`IVA` suffix, which is
/// dropped. The last digit must match the mod-11 checksum.
pub fn validate_uid(raw: &str) -> Result<String, TaxasError> {
    let upper = raw.trim().to_uppercase();
    let body = ["MWST", "TVA", "IVA"]
        .iter()
        .find_map(|suffix| upper.strip_suffix(*suffix))
        .unwrap_or(upper.as_str())
        .trim();

    let Some(rest) = body.strip_prefix("CHE") else {
        return Err(TaxasError::input("uid", format!("'{raw}' must start with CHE")));
    };

    let mut digits = Vec::with_capacity(9);
    for c in rest.chars() {
        match c {
            '0'..='9' => digits.push(c as u32 - '0' as u32),
            '-' | '.' | ' ' => {}
            _ => {
                return Err(TaxasError::input(
                    "uid",
                    format!("'{raw}' contains unexpected character '{c}'"),
                ));
            }
        }
    }

    if digits.len() != 9 {
        return Err(TaxasError::input(
            "uid",
            format!("'{raw}' must contain 9 digits, found {}", digits.len()),
        ));
    }

    let sum: u32 = digits[..8]
        .iter()
        .zip(UID_WEIGHTS)
        .map(|(d, w)| d * w)
        .sum();
    let check = match 11 - sum % 11 {
        11 => 0,
        10 => {
            return Err(TaxasError::input(
                "uid",
                format!("'{raw}' is not a valid UID number"),
            ));
        }
        c => c,
    };
    if check != digits[8] {
        return Err(TaxasError::input(
            "uid",
            format!("'{raw}' has an invalid check digit"),
        ));
    }

    let d: String = digits.iter().map(|d| char::from(b'0' + *d as u8)).collect();
    Ok(format!("CHE-{}.{}.{}", &d[0..3], &d[3..6], &d[6..9]))
}
