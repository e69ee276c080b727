//! Date helpers for the check-in/check-out inputs.
//!
//! HTML date inputs report their value as `YYYY-MM-DD`, or an empty string
//! when nothing is selected.

use crate::error::{BookingError, Result};
use chrono::{NaiveDate, Utc};

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(INPUT_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), INPUT_FORMAT)
        .map_err(|e| BookingError::InvalidDate(format!("{s:?}: {e}")))
}

/// Read a date input's value. Empty or malformed values count as unset.
pub fn parse_input(raw: &str) -> Option<NaiveDate> {
    if raw.trim().is_empty() {
        return None;
    }
    parse_date(raw).ok()
}

/// Format an optional date back into an input value (`""` when unset).
pub fn input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| format_date(&d)).unwrap_or_default()
}

/// Today's date in UTC, matching the date part of a browser's `toISOString()`.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_parse() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let formatted = format_date(&date);
        assert_eq!(formatted, "2024-06-10");
        assert_eq!(parse_date(&formatted).unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(matches!(
            parse_date("06/10/2024"),
            Err(BookingError::InvalidDate(_))
        ));
        assert!(parse_date("20240610").is_err());
    }

    #[test]
    fn test_parse_input_treats_blank_as_unset() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   "), None);
        assert_eq!(parse_input("2024-13-01"), None);
        assert_eq!(
            parse_input("2024-06-15"),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
    }

    #[test]
    fn test_input_value() {
        assert_eq!(input_value(None), "");
        assert_eq!(
            input_value(NaiveDate::from_ymd_opt(2024, 2, 29)),
            "2024-02-29"
        );
    }
}
