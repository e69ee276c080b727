//! Total price for the selected stay.

use crate::state::AppState;
use dioxus::prelude::*;

/// DOM id of the price element.
pub const TOTAL_PRICE_ID: &str = "total-price";

#[component]
pub fn PriceSummary() -> Element {
    let state = use_context::<AppState>();
    let price = state
        .form
        .read()
        .display()
        .total_price
        .clone()
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        p {
            style: "margin: 8px 0; font-size: 18px;",
            "Total: "
            strong {
                id: TOTAL_PRICE_ID,
                "{price}"
            }
        }
    }
}
