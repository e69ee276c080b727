//! Availability check over the browser's `fetch`.

use booking_core::availability::AvailabilityResult;
use booking_core::controller::PendingCheck;
use booking_core::{BookingError, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, UrlSearchParams};

fn js_error(err: JsValue) -> BookingError {
    BookingError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// POST the check's fields to its endpoint and decode the JSON reply.
///
/// The body is form-encoded and the request is same-origin, so the session
/// cookie travels with it. The reply is decoded whatever its status.
pub async fn fetch_availability(pending: &PendingCheck) -> Result<AvailabilityResult> {
    let window = web_sys::window().ok_or_else(|| BookingError::network("no window"))?;

    let params = UrlSearchParams::new().map_err(js_error)?;
    for (name, value) in pending.request.form_fields() {
        params.append(name, value);
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&params);

    let request = Request::new_with_str_and_init(&pending.url, &init).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        log::warn!(
            "Availability check for {} returned {}",
            pending.url,
            response.status()
        );
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = body
        .as_string()
        .ok_or_else(|| BookingError::decode("response body is not text"))?;
    AvailabilityResult::from_json(&body)
}
