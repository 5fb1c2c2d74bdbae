//! Monetary rounding policy.
//!
//! Rates carry four decimal places and amounts are computed unrounded.
//! [`round_chf`] is applied exactly once per figure, when it is displayed or
//! serialized. Totals are summed from unrounded line amounts and rounded at
//! the end, so a total may differ from the sum of its rounded lines by at
//! most half a centime per line.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in CHF amounts.
pub const CHF_DECIMALS: u32 = 2;

/// Round a CHF amount half up to the centime.
///
/// `0.125` becomes `0.13`; `-0.125` becomes `-0.13`.
pub fn round_chf(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CHF_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a CHF amount with exactly two decimals and a dot separator.
///
/// Independent of any locale: `1234.5` is written as `1234.50`, never
/// `1'234.50` or `1234,50`.
pub fn format_chf(amount: Decimal) -> String {
    format!("{:.2}", round_chf(amount))
}

/// Upper bound on `|round(Σ lines) − Σ round(line)|` for `lines` items.
pub fn max_rounding_drift(lines: usize) -> Decimal {
    Decimal::new(5, 3) * Decimal::from(lines)
}
