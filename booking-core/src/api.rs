//! Native transport for the availability endpoint.

use crate::availability::AvailabilityResult;
use crate::controller::PendingCheck;
use crate::error::{BookingError, Result};
use log::{debug, warn};
use reqwest::{Client, StatusCode};

/// Join a server origin (`http://localhost:5000`) with an endpoint path.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Send one availability check and decode the reply.
///
/// The body is decoded whatever the status code; only an unreachable server
/// or a body that is not availability JSON is an error.
pub async fn check_availability(
    client: &Client,
    base_url: &str,
    pending: &PendingCheck,
) -> Result<AvailabilityResult> {
    let url = endpoint_url(base_url, &pending.url);
    debug!("POST {} (generation {})", url, pending.generation);

    let response = client
        .post(&url)
        .form(&pending.request.form_fields())
        .send()
        .await
        .map_err(BookingError::network)?;

    if response.status() != StatusCode::OK {
        warn!("Availability check for {} returned {}", url, response.status());
    }

    let body = response.text().await.map_err(BookingError::network)?;
    AvailabilityResult::from_json(&body)
}
