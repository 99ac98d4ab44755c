/// Utilities for date and time formatting
use chrono::{DateTime, Local, NaiveDate, Utc};

/// "21 Oct 2025, 6:05 PM" in the browser's local time zone
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-d %b %Y, %-I:%M %p").to_string()
}

/// "Tue, 21 Oct" for an ISO `YYYY-MM-DD` date; other input is returned as is
pub fn format_travel_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%a, %-d %b").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// "just now", "5 min ago", "3 h ago", "2 d ago" relative to `now`
pub fn format_relative(at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let minutes = (*now - *at).num_minutes().max(0);
    match minutes {
        0 => "just now".to_string(),
        1..=59 => format!("{} min ago", minutes),
        60..=1439 => format!("{} h ago", minutes / 60),
        _ => format!("{} d ago", minutes / 1440),
    }
}

/// Today's date as `YYYY-MM-DD`, the value a date input expects
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_travel_date() {
        assert_eq!(format_travel_date("2025-10-21"), "Tue, 21 Oct");
        assert_eq!(format_travel_date("next week"), "next week");
    }

    #[test]
    fn test_format_relative() {
        let now = Utc.with_ymd_and_hms(2025, 10, 21, 12, 0, 0).unwrap();
        assert_eq!(format_relative(&now, &now), "just now");
        assert_eq!(format_relative(&(now - Duration::minutes(5)), &now), "5 min ago");
        assert_eq!(format_relative(&(now - Duration::hours(3)), &now), "3 h ago");
        assert_eq!(format_relative(&(now - Duration::days(2)), &now), "2 d ago");
        assert_eq!(format_relative(&(now + Duration::minutes(5)), &now), "just now");
    }

    #[test]
    fn test_today_iso_shape() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
