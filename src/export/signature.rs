//! Technical signature stamped on every export row.
//!
//! The signature lets support trace an export back to a user and a day. It is
//! not a cryptographic seal: two users whose identifiers share the same first
//! eight alphanumerics produce the same signature on the same day.

use chrono::NaiveDate;

/// Format prefix, bumped when the signature layout changes.
pub const SIGNATURE_PREFIX: &str = "TAXAS-V1";

/// Number of user identifier characters kept in the signature.
pub const SIGNATURE_USER_CHARS: usize = 8;

/// `TAXAS-V1-YYYYMMDD-<USER>` where `<USER>` is the first eight ASCII
/// alphanumerics of `user_id`, uppercased (`ANON` if there are none).
pub fn generate_technical_signature(user_id: &str, date: NaiveDate) -> String {
    let user: String = user_id
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(SIGNATURE_USER_CHARS)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let user = if user.is_empty() { "ANON".to_string() } else { user };
    format!("{SIGNATURE_PREFIX}-{}-{user}", date.format("%Y%m%d"))
}

/// [`generate_technical_signature`] for the current local date.
pub fn generate_technical_signature_today(user_id: &str) -> String {
    generate_technical_signature(user_id, chrono::Local::now().date_naive())
}
