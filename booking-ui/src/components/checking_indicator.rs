//! Checking-availability indicator.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shown while a check for the current dates is outstanding.
#[component]
pub fn CheckingIndicator() -> Element {
    let state = use_context::<AppState>();
    if !state.form.read().is_checking() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "padding: 4px 0; color: #666; font-size: 13px;",
            "Checking availability..."
        }
    }
}
