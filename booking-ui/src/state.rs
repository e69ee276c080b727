//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the booking form controller in a signal and is provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use crate::http;
use booking_core::config::FormConfig;
use booking_core::controller::{BookingForm, PendingCheck};
use chrono::NaiveDate;
use dioxus::prelude::*;

/// Shared state of the booking form page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Date values, minimums and the latest availability verdict
    pub form: Signal<BookingForm>,
}

impl AppState {
    pub fn new(config: FormConfig, today: NaiveDate) -> Self {
        Self {
            form: Signal::new(BookingForm::new(config, today)),
        }
    }

    /// Check-in input changed.
    pub fn check_in_changed(&mut self, value: &str) {
        let pending = self.form.write().set_check_in(value);
        self.dispatch(pending);
    }

    /// Check-out input changed.
    pub fn check_out_changed(&mut self, value: &str) {
        let pending = self.form.write().set_check_out(value);
        self.dispatch(pending);
    }

    /// Fire the check without waiting for it. Overlapping checks are allowed;
    /// the controller keeps only the newest result.
    fn dispatch(&self, pending: Option<PendingCheck>) {
        let Some(pending) = pending else {
            return;
        };
        let mut form = self.form;
        spawn(async move {
            let outcome = http::fetch_availability(&pending).await;
            if let Err(e) = &outcome {
                log::error!("Error checking availability: {}", e);
            }
            if !form.write().resolve(pending.generation, outcome) {
                log::debug!(
                    "Ignored availability result for {} to {}",
                    pending.request.check_in,
                    pending.request.check_out
                );
            }
        });
    }
}
