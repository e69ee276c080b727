//! Canvas element for a Chart.js chart.

use dioxus::prelude::*;

/// Props for ChartCanvas
#[derive(Props, Clone, PartialEq)]
pub struct ChartCanvasProps {
    /// The DOM id of the canvas (Chart.js will render into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 300)]
    pub min_height: u32,
}

/// A sized wrapper with a canvas inside.
#[component]
pub fn ChartCanvas(props: ChartCanvasProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            canvas {
                id: "{props.id}",
            }
        }
    }
}
