//! Reusable Dioxus RSX components for the booking pages.

mod availability_alert;
mod book_button;
mod chart_canvas;
mod chart_card;
mod checking_indicator;
mod price_summary;
mod stay_dates_picker;

pub use availability_alert::{AvailabilityAlert, AVAILABILITY_MESSAGE_ID};
pub use book_button::{BookButton, BOOK_BUTTON_ID};
pub use chart_canvas::ChartCanvas;
pub use chart_card::ChartCard;
pub use checking_indicator::CheckingIndicator;
pub use price_summary::{PriceSummary, TOTAL_PRICE_ID};
pub use stay_dates_picker::{StayDatesPicker, CHECK_IN_ID, CHECK_OUT_ID};
