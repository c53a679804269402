use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::steps::InputError;

/// Normalizes numeric input: trims whitespace and removes commas (thousands separator).
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a user count such as `"5"` or `"1,000"`.
///
/// Zero is accepted here; the wizard itself refuses to advance with it.
pub fn parse_user_count(s: &str) -> Result<u32, InputError> {
    let normalized = normalize_number_input(s);
    normalized.parse::<u32>().map_err(|e| {
        tracing::debug!(input = %s, "invalid user count: {}", e);
        InputError::InvalidNumber(s.trim().to_string())
    })
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(s.trim().to_string()))
}

/// Formats money with thousands separators and two decimals, e.g. `$8,373.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", if negative { "-" } else { "" }, grouped, cents)
}

/// Formats an optional value for display, using "—" when `None`.
pub fn opt_display<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "—".to_string())
}
