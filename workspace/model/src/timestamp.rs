//! Lenient timestamp decoding.
//!
//! The backend sends ISO-8601 strings, sometimes with a time component and
//! sometimes as a bare date. A value that cannot be read becomes `None`
//! rather than failing the whole page.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

pub type Timestamp = DateTime<Utc>;

/// Serde adapter for `Option<Timestamp>` fields.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse))
}

pub fn parse(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    let date = raw.get(..10)?;
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc()),
        Err(_) => {
            tracing::debug!("Discarding unparseable timestamp: {}", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_rfc3339_with_millis() {
        let ts = parse("2024-03-05T10:15:30.000Z").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn test_parse_bare_date_and_local_datetime() {
        assert_eq!(parse("2024-03-05").unwrap().day(), 5);
        assert_eq!(parse("2024-03-05T10:15:30").unwrap().day(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("").is_none());
        assert!(parse("yesterday").is_none());
    }
}
