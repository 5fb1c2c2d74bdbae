//! Free-text sanitization for delimiter-separated output.

/// Make a free-text value safe to place between `;` delimiters.
///
/// - `;` becomes `,`
/// - each run of line breaks (`\r`, `\n`, vertical tab, form feed, NEL,
///   U+2028, U+2029) becomes a single space
/// - tabs become spaces, other control characters are dropped
/// - leading and trailing whitespace is trimmed
pub fn sanitize_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_break = false;
    for ch in value.chars() {
        match ch {
            '\r' | '\n' | '\u{0b}' | '\u{0c}' | '\u{85}' | '\u{2028}' | '\u{2029}' => {
                if !in_break {
                    out.push(' ');
                    in_break = true;
                }
                continue;
            }
            ';' => out.push(','),
            '\t' => out.push(' '),
            c if c.is_control() => {}
            c => out.push(c),
        }
        in_break = false;
    }
    out.trim().to_string()
}
