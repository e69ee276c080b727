//! Availability check request/response types and how a result is shown.
//!
//! The server answers `POST /booking/check_availability/{room_id}` with
//! `{ "available": bool, "message": string, "total_price": number }`.
//! Rejections ("Check-in date cannot be in the past." and friends) arrive as
//! ordinary responses with `available: false`.

use crate::dates::format_date;
use crate::error::{BookingError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shown when the check fails before a usable response arrives.
pub const GENERIC_ERROR_MESSAGE: &str = "Error checking availability. Please try again.";

/// Form-encoded body of an availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityRequest {
    pub check_in: String,
    pub check_out: String,
    pub csrf_token: String,
}

impl AvailabilityRequest {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate, csrf_token: &str) -> Self {
        Self {
            check_in: format_date(&check_in),
            check_out: format_date(&check_out),
            csrf_token: csrf_token.to_string(),
        }
    }

    /// Field name/value pairs in submission order.
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("check_in", self.check_in.as_str()),
            ("check_out", self.check_out.as_str()),
            ("csrf_token", self.csrf_token.as_str()),
        ]
    }
}

/// Server verdict for one date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub available: bool,
    pub message: String,
    pub total_price: f64,
}

impl AvailabilityResult {
    /// Decode a response body. Anything but the expected object is an error.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(BookingError::decode)
    }
}

/// Bootstrap alert flavor for the message region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Danger,
}

impl AlertLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            AlertLevel::Success => "alert alert-success",
            AlertLevel::Danger => "alert alert-danger",
        }
    }
}

/// Text for the `availability-message` region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: AlertLevel,
}

/// Everything the page shows about the latest applied check.
///
/// The default is the state before any check: no notice, no price and the
/// book button disabled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvailabilityDisplay {
    pub notice: Option<Notice>,
    pub total_price: Option<String>,
    pub can_book: bool,
}

impl AvailabilityDisplay {
    /// Render one check outcome. A failed check never allows booking.
    pub fn from_outcome(outcome: &Result<AvailabilityResult>) -> Self {
        match outcome {
            Ok(result) => Self {
                notice: Some(Notice {
                    text: result.message.clone(),
                    level: if result.available {
                        AlertLevel::Success
                    } else {
                        AlertLevel::Danger
                    },
                }),
                total_price: Some(format_price(result.total_price)),
                can_book: result.available,
            },
            Err(_) => Self {
                notice: Some(Notice {
                    text: GENERIC_ERROR_MESSAGE.to_string(),
                    level: AlertLevel::Danger,
                }),
                total_price: None,
                can_book: false,
            },
        }
    }

    /// CSS class of the message region, if it is visible.
    pub fn alert_class(&self) -> Option<&'static str> {
        self.notice.as_ref().map(|n| n.level.css_class())
    }
}

/// Format a price the way a browser stringifies a number: `450` stays `450`,
/// `450.5` stays `450.5`, and magnitudes from `1e21` up or below `1e-6` use
/// exponent form (`1e+21`, `1.5e-7`).
pub fn format_price(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "$Infinity".to_string()
        } else {
            "$-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "$0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return format!("${}", exponent_form(value));
    }
    format!("${value}")
}

/// `{:e}` gives `1e21`; numbers print as `1e+21`.
fn exponent_form(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        crate::dates::parse_date(s).unwrap()
    }

    #[test]
    fn request_fields_are_in_form_order() {
        let request = AvailabilityRequest::new(date("2024-06-10"), date("2024-06-15"), "tok");
        assert_eq!(
            request.form_fields(),
            [
                ("check_in", "2024-06-10"),
                ("check_out", "2024-06-15"),
                ("csrf_token", "tok"),
            ]
        );
    }

    #[test]
    fn decodes_integer_and_fractional_prices() {
        let result = AvailabilityResult::from_json(
            r#"{"available": true, "message": "Available", "total_price": 450}"#,
        )
        .unwrap();
        assert!(result.available);
        assert_eq!(result.total_price, 450.0);

        let result = AvailabilityResult::from_json(
            r#"{"available": false, "message": "Room is not available for the selected dates.", "total_price": 199.99}"#,
        )
        .unwrap();
        assert!(!result.available);
        assert_eq!(result.total_price, 199.99);
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = AvailabilityResult::from_json("<html>400 Bad Request</html>").unwrap_err();
        assert!(matches!(err, BookingError::Decode(_)));

        let err = AvailabilityResult::from_json(r#"{"available": true}"#).unwrap_err();
        assert!(matches!(err, BookingError::Decode(_)));
    }

    #[test]
    fn available_result_enables_booking() {
        let display = AvailabilityDisplay::from_outcome(&Ok(AvailabilityResult {
            available: true,
            message: "Available".to_string(),
            total_price: 450.0,
        }));
        assert_eq!(display.alert_class(), Some("alert alert-success"));
        assert_eq!(display.notice.as_ref().unwrap().text, "Available");
        assert_eq!(display.total_price.as_deref(), Some("$450"));
        assert!(display.can_book);
    }

    #[test]
    fn rejection_is_shown_verbatim_as_danger() {
        let display = AvailabilityDisplay::from_outcome(&Ok(AvailabilityResult {
            available: false,
            message: "Check-out date must be after check-in date.".to_string(),
            total_price: 0.0,
        }));
        assert_eq!(display.alert_class(), Some("alert alert-danger"));
        assert_eq!(
            display.notice.unwrap().text,
            "Check-out date must be after check-in date."
        );
        assert_eq!(display.total_price.as_deref(), Some("$0"));
        assert!(!display.can_book);
    }

    #[test]
    fn failure_fails_closed() {
        let display =
            AvailabilityDisplay::from_outcome(&Err(BookingError::network("connection refused")));
        assert_eq!(display.alert_class(), Some("alert alert-danger"));
        assert_eq!(display.notice.unwrap().text, GENERIC_ERROR_MESSAGE);
        assert_eq!(display.total_price, None);
        assert!(!display.can_book);
    }

    #[test]
    fn default_display_is_hidden_and_disabled() {
        let display = AvailabilityDisplay::default();
        assert_eq!(display.alert_class(), None);
        assert!(!display.can_book);
    }

    #[test]
    fn price_formatting_matches_number_to_string() {
        assert_eq!(format_price(450.0), "$450");
        assert_eq!(format_price(450.5), "$450.5");
        assert_eq!(format_price(0.1 + 0.2), "$0.30000000000000004");
        assert_eq!(format_price(-0.0), "$0");
        assert_eq!(format_price(f64::NAN), "$NaN");
        assert_eq!(format_price(1234567.0), "$1234567");
        assert_eq!(format_price(999999999999999900000.0), "$999999999999999900000");
        assert_eq!(format_price(0.000001), "$0.000001");
    }

    #[test]
    fn extreme_prices_use_exponent_form() {
        assert_eq!(format_price(1e21), "$1e+21");
        assert_eq!(format_price(-1e21), "$-1e+21");
        assert_eq!(format_price(2.5e22), "$2.5e+22");
        assert_eq!(format_price(1e-7), "$1e-7");
        assert_eq!(format_price(1.5e-7), "$1.5e-7");
    }
}
