//! Availability message region.

use crate::state::AppState;
use dioxus::prelude::*;

/// DOM id of the message region.
pub const AVAILABILITY_MESSAGE_ID: &str = "availability-message";

/// Shows the latest availability verdict as a Bootstrap alert.
/// Hidden until a check has completed.
#[component]
pub fn AvailabilityAlert() -> Element {
    let state = use_context::<AppState>();
    let notice = state.form.read().display().notice.clone();

    let (class, display, text) = match notice {
        Some(notice) => (notice.level.css_class(), "block", notice.text),
        None => ("alert", "none", String::new()),
    };

    rsx! {
        div {
            id: AVAILABILITY_MESSAGE_ID,
            class: "{class}",
            role: "alert",
            style: "display: {display}; margin: 8px 0;",
            "{text}"
        }
    }
}
