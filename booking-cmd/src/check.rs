//! One-off availability check against a running server.

use booking_core::api;
use booking_core::availability::AvailabilityDisplay;
use booking_core::config::FormConfig;
use booking_core::controller::{BookingForm, PendingCheck};
use booking_core::dates::{parse_date, today_utc};
use booking_core::BookingError;
use log::{info, warn};
use reqwest::Client;

/// The stay to check, as given on the command line.
#[derive(Debug, Clone)]
pub struct StayArgs {
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
    pub csrf_token: Option<String>,
    pub endpoint_base: String,
}

/// Validate the stay and build the request the booking form would send.
pub fn prepare(stay: &StayArgs) -> anyhow::Result<(BookingForm, PendingCheck)> {
    let check_in = parse_date(&stay.check_in)?;
    let check_out = parse_date(&stay.check_out)?;
    if check_out < check_in {
        return Err(BookingError::InvertedRange {
            check_in: stay.check_in.clone(),
            check_out: stay.check_out.clone(),
        }
        .into());
    }

    let today = today_utc();
    if check_in < today {
        warn!("Check-in {} is in the past; the server will refuse it", check_in);
    }

    let csrf_token = stay.csrf_token.clone().unwrap_or_default();
    let config = FormConfig::new(Some(stay.room_id.clone()), Some(csrf_token))
        .with_endpoint_base(&stay.endpoint_base);
    let mut form = BookingForm::new(config, today);
    form.set_check_in(&stay.check_in);
    let pending = form
        .set_check_out(&stay.check_out)
        .ok_or(BookingError::MissingRoomId)?;
    Ok((form, pending))
}

/// Human-readable summary of a verdict.
pub fn render_display(display: &AvailabilityDisplay) -> String {
    let mut lines = Vec::new();
    if let Some(notice) = &display.notice {
        lines.push(format!("{} [{}]", notice.text, notice.level.css_class()));
    }
    if let Some(price) = &display.total_price {
        lines.push(format!("Total price: {}", price));
    }
    lines.push(format!(
        "Bookable: {}",
        if display.can_book { "yes" } else { "no" }
    ));
    lines.join("\n")
}

/// Run the check and print the verdict. Transport or decode failures are
/// printed like the page shows them and returned as an error.
pub async fn run_check(base_url: &str, stay: &StayArgs) -> anyhow::Result<()> {
    let (mut form, pending) = prepare(stay)?;
    info!(
        "Checking room {} from {} to {}",
        stay.room_id, pending.request.check_in, pending.request.check_out
    );

    let client = Client::new();
    let outcome = api::check_availability(&client, base_url, &pending).await;
    let failure = outcome.as_ref().err().cloned();
    form.resolve(pending.generation, outcome);

    println!("{}", render_display(form.display()));

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_core::availability::{AvailabilityResult, GENERIC_ERROR_MESSAGE};

    fn stay(check_in: &str, check_out: &str) -> StayArgs {
        StayArgs {
            room_id: "7".to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            csrf_token: None,
            endpoint_base: booking_core::config::DEFAULT_ENDPOINT_BASE.to_string(),
        }
    }

    #[test]
    fn prepare_builds_form_request() {
        let (_, pending) = prepare(&stay("2099-06-10", "2099-06-15")).unwrap();
        assert_eq!(pending.url, "/booking/check_availability/7");
        assert_eq!(pending.request.check_in, "2099-06-10");
        assert_eq!(pending.request.csrf_token, "");
    }

    #[test]
    fn prepare_rejects_inverted_range() {
        let err = prepare(&stay("2099-06-10", "2099-06-05")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BookingError>(),
            Some(BookingError::InvertedRange { .. })
        ));
    }

    #[test]
    fn prepare_rejects_bad_dates() {
        let err = prepare(&stay("June 10", "2099-06-05")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BookingError>(),
            Some(BookingError::InvalidDate(_))
        ));
    }

    #[test]
    fn render_available() {
        let display = AvailabilityDisplay::from_outcome(&Ok(AvailabilityResult {
            available: true,
            message: "Available".to_string(),
            total_price: 450.0,
        }));
        assert_eq!(
            render_display(&display),
            "Available [alert alert-success]\nTotal price: $450\nBookable: yes"
        );
    }

    #[test]
    fn render_failure() {
        let display = AvailabilityDisplay::from_outcome(&Err(BookingError::network("refused")));
        assert_eq!(
            render_display(&display),
            format!("{} [alert alert-danger]\nBookable: no", GENERIC_ERROR_MESSAGE)
        );
    }
}
