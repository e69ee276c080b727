//! Room booking form
//!
//! Mounted inside the server-rendered `<form id="booking-form"
//! data-room-id="...">` on a room page, next to its hidden `csrf_token`
//! input. Renders the stay dates, the availability message, the total price
//! and the book button, and keeps them in sync:
//!
//! 1. On mount: read room id and CSRF token from the host page and set the
//!    earliest check-in to today.
//! 2. On a date change: the controller in `booking-core` fixes up the date
//!    pair and, once both dates are set, hands back a check to send.
//! 3. The check is POSTed via `fetch` without blocking input; its verdict is
//!    applied only if no date changed in the meantime.
//!
//! The form submits natively to the server's booking route.

use booking_core::dates::today_utc;
use booking_ui::components::{
    AvailabilityAlert, BookButton, CheckingIndicator, PriceSummary, StayDatesPicker,
};
use booking_ui::host;
use booking_ui::js_bridge;
use booking_ui::state::AppState;
use dioxus::prelude::*;

/// Mount point inside `#booking-form`.
const ROOT_ID: &str = "booking-form-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = host::read_form_config();
        let today = today_utc();
        log::info!(
            "Booking form for room {} (check-in from {})",
            config.room_id.as_deref().unwrap_or("<none>"),
            today
        );
        AppState::new(config, today)
    });

    // Tooltips elsewhere on the room page
    use_effect(move || {
        js_bridge::init_tooltips();
    });

    rsx! {
        div {
            style: "max-width: 520px; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            StayDatesPicker {}
            CheckingIndicator {}
            AvailabilityAlert {}
            PriceSummary {}

            BookButton {}
        }
    }
}
