//! Timestamp parsing for the backend's ISO-8601 strings.
//!
//! The backend emits both offset-qualified RFC 3339 timestamps and naive
//! `isoformat()` strings; naive values are taken as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_rfc3339_and_naive() {
        let a = parse_timestamp("2025-08-12T17:45:00+02:00").unwrap();
        assert_eq!(a.hour(), 15);

        let b = parse_timestamp("2025-08-12T17:45:00.123456").unwrap();
        assert_eq!(b.hour(), 17);
        assert_eq!(b.day(), 12);

        let c = parse_timestamp("2025-08-12 17:45:00").unwrap();
        assert_eq!(c.minute(), 45);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
