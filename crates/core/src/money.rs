//! Display-money helpers.
//!
//! Catalog prices arrive as decimal floats in US-dollar units. This module
//! renders them for display; the storefront never converts currencies or
//! does ledger arithmetic.

/// Format an amount the en-US way: `$` sign, thousands separators, two
/// decimal places (`1234.5` becomes `$1,234.50`).
///
/// The amount is rounded to the nearest cent. Non-finite input renders as
/// `$0.00`.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Percentage saved when `discounted` replaces `original`, rounded to the
/// nearest whole percent.
///
/// Returns `None` when `original` is zero or negative (no meaningful
/// baseline) or either amount is non-finite. A markup yields a negative
/// percentage.
pub fn discount_percent(original: f64, discounted: f64) -> Option<i64> {
    if !original.is_finite() || !discounted.is_finite() || original <= 0.0 {
        return None;
    }

    let percent = (original - discounted) / original * 100.0;
    Some(percent.round() as i64)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
