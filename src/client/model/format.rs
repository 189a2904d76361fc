//! Display helpers shared by the dashboard and notification pages.

use chrono::{DateTime, Utc};

/// 1234 -> "1.2K", 3_400_000 -> "3.4M".
pub fn format_number(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Fraction in `0.0..=1.0` to a percentage with `decimals` places.
pub fn format_percentage(fraction: f64, decimals: usize) -> String {
    if !fraction.is_finite() {
        return "0%".to_string();
    }
    format!("{:.*}%", decimals, fraction * 100.0)
}

pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        format_date(timestamp)
    }
}

pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

pub fn format_datetime(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn number_suffixes() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_234), "1.2K");
        assert_eq!(format_number(3_400_000), "3.4M");
    }

    #[test]
    fn percentage_places() {
        assert_eq!(format_percentage(0.853, 1), "85.3%");
        assert_eq!(format_percentage(1.0, 0), "100%");
        assert_eq!(format_percentage(f64::NAN, 1), "0%");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2025, 8, 13, 12, 0, 0).unwrap();

        assert_eq!(format_relative_time(now - Duration::seconds(20), now), "Just now");
        assert_eq!(format_relative_time(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(format_relative_time(now - Duration::days(2), now), "2d ago");
        assert_eq!(
            format_relative_time(now - Duration::days(30), now),
            "Jul 14, 2025"
        );
    }
}
