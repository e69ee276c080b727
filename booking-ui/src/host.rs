//! Values the server-rendered page hands to the booking form.
//!
//! The room page renders
//! `<form id="booking-form" data-room-id="7">` with a hidden
//! `<input name="csrf_token">` inside, and a mount point for the app.
//! Anything missing is read as `None`; the form then simply never checks.
//! A CSRF input that exists but is empty still counts as present.

use booking_core::config::FormConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

/// DOM id of the server-rendered booking form.
pub const BOOKING_FORM_ID: &str = "booking-form";
/// Attribute on the booking form carrying the room id.
pub const ROOM_ID_ATTRIBUTE: &str = "data-room-id";
/// Hidden anti-forgery input.
pub const CSRF_INPUT_SELECTOR: &str = "input[name=\"csrf_token\"]";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Room id from `#booking-form[data-room-id]`.
pub fn room_id() -> Option<String> {
    document()?
        .get_element_by_id(BOOKING_FORM_ID)?
        .get_attribute(ROOM_ID_ATTRIBUTE)
}

/// Value of the hidden CSRF input.
pub fn csrf_token() -> Option<String> {
    let element = document()?.query_selector(CSRF_INPUT_SELECTOR).ok()??;
    element
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

/// Read the form configuration from the current page.
pub fn read_form_config() -> FormConfig {
    let config = FormConfig::new(room_id(), csrf_token());
    if config.room_id.is_none() {
        log::warn!("No {} on #{}; availability checks are off", ROOM_ID_ATTRIBUTE, BOOKING_FORM_ID);
    }
    if config.csrf_token.is_none() {
        log::warn!("No CSRF input found; availability checks are off");
    }
    config
}
