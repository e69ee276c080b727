//! Admin dashboard charts
//!
//! Two illustrative Chart.js charts with fixed sample figures: bookings per
//! month (line) and bookings by room type (doughnut).
//!
//! Data flow:
//! 1. On mount: install the Chart.js helpers (waits for the `Chart` global).
//! 2. Each chart config from `booking-core::charts` is serialized and drawn
//!    into its canvas once the canvas exists. A missing canvas is skipped.

use booking_core::charts::{self, BOOKINGS_CHART_ID, ROOM_TYPE_CHART_ID};
use booking_ui::components::ChartCard;
use booking_ui::js_bridge;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_effect(move || {
        js_bridge::init_charts();
        js_bridge::init_tooltips();

        for (canvas_id, config) in charts::dashboard_charts() {
            match config.to_json() {
                Ok(config_json) => js_bridge::render_chart(canvas_id, &config_json),
                Err(e) => log::error!("Failed to serialize chart {}: {}", canvas_id, e),
            }
        }
    });

    use_drop(move || {
        js_bridge::destroy_chart(BOOKINGS_CHART_ID);
        js_bridge::destroy_chart(ROOM_TYPE_CHART_ID);
    });

    rsx! {
        div {
            class: "container-fluid",
            style: "max-width: 1100px; font-family: system-ui, -apple-system, sans-serif;",
            div {
                class: "row g-4",
                div {
                    class: "col-lg-8",
                    ChartCard { canvas_id: BOOKINGS_CHART_ID.to_string() }
                }
                div {
                    class: "col-lg-4",
                    ChartCard { canvas_id: ROOM_TYPE_CHART_ID.to_string() }
                }
            }
        }
    }
}
