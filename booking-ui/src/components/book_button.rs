//! Submit button of the booking form.

use crate::state::AppState;
use dioxus::prelude::*;

/// DOM id of the submit button.
pub const BOOK_BUTTON_ID: &str = "book-button";

/// Enabled only while the latest check says the room is available.
#[component]
pub fn BookButton() -> Element {
    let state = use_context::<AppState>();
    let can_book = state.form.read().display().can_book;

    rsx! {
        button {
            id: BOOK_BUTTON_ID,
            r#type: "submit",
            class: "btn btn-primary",
            disabled: !can_book,
            "Book Now"
        }
    }
}
