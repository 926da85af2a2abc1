//! Currency formatting.
//!
//! Renders amounts with the currency symbol and comma thousands grouping.
//! Values are rounded half away from zero to two decimal places; whole
//! amounts drop the fraction.

use crate::constants::{CURRENCY_SYMBOL, RESULT_DECIMAL_PLACES};

/// Format `amount` as a currency string, e.g. `£30,000` or `£33.33`
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.*}", RESULT_DECIMAL_PLACES, round_half_away(amount.abs()));
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (fixed.as_str(), ""),
    };

    let is_whole = fraction.chars().all(|ch| ch == '0');
    let sign = if amount < 0.0 && !(is_whole && whole == "0") {
        "-"
    } else {
        ""
    };

    let grouped = group_thousands(whole);
    if is_whole {
        format!("{}{}{}", sign, CURRENCY_SYMBOL, grouped)
    } else {
        format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, grouped, fraction)
    }
}

/// Round to `RESULT_DECIMAL_PLACES`; `{:.2}` alone would round exact ties to even
fn round_half_away(amount: f64) -> f64 {
    let scale = 10f64.powi(RESULT_DECIMAL_PLACES as i32);
    let scaled = amount * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        amount
    }
}

/// Insert a comma between every group of three digits, counting from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
