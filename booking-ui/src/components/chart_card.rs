//! Bootstrap card holding one dashboard chart.

use super::ChartCanvas;
use booking_core::charts::chart_title;
use dioxus::prelude::*;

const SAMPLE_DATA_TOOLTIP: &str = "Illustrative figures, not live bookings";

#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    /// Canvas id; also picks the card heading
    pub canvas_id: String,
    /// Mark the figures as sample data
    #[props(default = true)]
    pub sample: bool,
}

#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    let title = chart_title(&props.canvas_id).unwrap_or(props.canvas_id.as_str());

    rsx! {
        div {
            class: "card h-100",
            div {
                class: "card-header d-flex justify-content-between align-items-center",
                h5 { class: "card-title mb-0", "{title}" }
                if props.sample {
                    span {
                        class: "badge bg-secondary",
                        "data-bs-toggle": "tooltip",
                        title: SAMPLE_DATA_TOOLTIP,
                        "Sample data"
                    }
                }
            }
            div {
                class: "card-body",
                ChartCanvas { id: props.canvas_id.clone() }
            }
        }
    }
}
