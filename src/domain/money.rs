//! Monetary and measurement types.
//!
//! Every quantity in the calculator is a [`Decimal`] so that fee schedules
//! and cost rates keep their exact cent values through the blend.

use rust_decimal::Decimal;

/// Monetary amount in the contract currency.
pub type Amount = Decimal;

/// Connection length in metres.
pub type Length = Decimal;

/// Completion rate in connections per month.
pub type Rate = Decimal;

/// Duration in (possibly fractional) months.
pub type Months = Decimal;

/// Format an amount with thousands separators and two decimals.
///
/// `1234567.891` renders as `1,234,567.89`.
#[must_use]
pub fn format_amount(amount: Amount) -> String {
    let rounded = format!("{:.2}", amount.round_dp(2));
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{fraction}")
}
