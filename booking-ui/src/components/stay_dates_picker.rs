//! Check-in and check-out date inputs.

use crate::state::AppState;
use booking_core::dates::{format_date, input_value};
use dioxus::prelude::*;

/// DOM id (and form field name) of the check-in input.
pub const CHECK_IN_ID: &str = "check_in";
/// DOM id (and form field name) of the check-out input.
pub const CHECK_OUT_ID: &str = "check_out";

/// Date inputs for the stay. Check-in can't be in the past and check-out
/// can't precede check-in; both are submitted with the booking form.
#[component]
pub fn StayDatesPicker() -> Element {
    let mut state = use_context::<AppState>();
    let (check_in, check_out, check_in_min, check_out_min) = {
        let form = state.form.read();
        (
            input_value(form.check_in()),
            input_value(form.check_out()),
            format_date(&form.check_in_min()),
            input_value(form.check_out_min()),
        )
    };

    let on_check_in_change = move |evt: Event<FormData>| {
        state.check_in_changed(&evt.value());
    };

    let on_check_out_change = move |evt: Event<FormData>| {
        state.check_out_changed(&evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: CHECK_IN_ID,
                style: "font-weight: bold;",
                "Check-in: "
                input {
                    r#type: "date",
                    id: CHECK_IN_ID,
                    name: CHECK_IN_ID,
                    class: "form-control",
                    required: true,
                    min: "{check_in_min}",
                    value: "{check_in}",
                    onchange: on_check_in_change,
                }
            }
            label {
                r#for: CHECK_OUT_ID,
                style: "font-weight: bold;",
                "Check-out: "
                input {
                    r#type: "date",
                    id: CHECK_OUT_ID,
                    name: CHECK_OUT_ID,
                    class: "form-control",
                    required: true,
                    min: "{check_out_min}",
                    value: "{check_out}",
                    onchange: on_check_out_change,
                }
            }
        }
    }
}
