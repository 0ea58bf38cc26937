use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rusty_money::{Money, iso};

const PLACEHOLDER: &str = "-";

/// Formats an amount in its currency when the code is a known ISO currency,
/// otherwise as a plain two-decimal number followed by the code.
pub fn format_amount(amount: Decimal, currency: Option<&str>) -> String {
    let code = currency.map(str::trim).filter(|c| !c.is_empty());
    match code.map(|c| (c, iso::find(&c.to_ascii_uppercase()))) {
        Some((_, Some(currency))) => Money::from_decimal(amount, currency).to_string(),
        Some((code, None)) => {
            tracing::trace!("Unknown currency code {}", code);
            format!("{} {}", amount.round_dp(2), code)
        }
        None => amount.round_dp(2).to_string(),
    }
}

/// [`format_amount`], or a dash when the amount is missing.
pub fn format_optional_amount(amount: Option<Decimal>, currency: Option<&str>) -> String {
    amount
        .map(|amount| format_amount(amount, currency))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// The text, or a dash when missing or blank.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Shortens `text` to `max` characters, marking the cut with "...".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn test_format_amount_known_currency() {
        let amount = Decimal::from_str("1500").unwrap();
        assert_eq!(format_amount(amount, Some("USD")), "$1,500.00");
        assert_eq!(format_amount(amount, Some("usd")), "$1,500.00");
    }

    #[test]
    fn test_format_amount_without_currency() {
        let amount = Decimal::from_str("250000.456").unwrap();
        assert_eq!(format_amount(amount, None), "250000.46");
        assert_eq!(format_amount(amount, Some("  ")), "250000.46");
        assert_eq!(format_amount(Decimal::from(5), Some("XYZ")), "5 XYZ");
    }

    #[test]
    fn test_missing_amount_is_a_dash() {
        assert_eq!(format_optional_amount(None, Some("USD")), "-");
        assert_eq!(format_optional_amount(Some(Decimal::from(7)), None), "7");
    }

    #[test]
    fn test_dates() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 14, 30, 0).unwrap();
        assert_eq!(format_date(Some(&ts)), "2024-06-01");
        assert_eq!(format_datetime(Some(&ts)), "2024-06-01 14:30");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("Loft")), "Loft");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a rather long description", 10), "a rathe...");
    }
}
