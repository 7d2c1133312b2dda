/// Utilities for date formatting
///
/// Dates travel through the app as ISO-8601 strings; these helpers only
/// touch presentation.
use chrono::NaiveDate;

fn parse_iso(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format an ISO date string for display.
/// Example: "2025-03-05" or "2025-03-05T14:02:26Z" -> "5 Mar 2025"
pub fn format_date(date_str: &str) -> String {
    match parse_iso(date_str) {
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Whole days elapsed since the given ISO date, clamped at zero.
/// Returns None for malformed input.
pub fn days_since(date_str: &str) -> Option<i64> {
    let date = parse_iso(date_str)?;
    let today = chrono::Utc::now().date_naive();
    Some((today - date).num_days().max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-05"), "5 Mar 2025");
        assert_eq!(format_date("2024-12-31T23:59:59Z"), "31 Dec 2024");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
        assert!(days_since("invalid").is_none());
    }

    #[test]
    fn test_days_since_today_is_zero() {
        let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(days_since(&today), Some(0));
    }

    #[test]
    fn test_days_since_future_clamps_to_zero() {
        assert_eq!(days_since("2999-01-01"), Some(0));
    }
}
