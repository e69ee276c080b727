//! Booking form controller.
//!
//! Keeps the check-in/check-out pair consistent and decides when an
//! availability check goes out. The controller never performs I/O: a date
//! change returns a [`PendingCheck`] that the caller sends however it likes
//! (browser `fetch`, `reqwest`), then hands the outcome back to
//! [`BookingForm::resolve`].
//!
//! Every date change starts a new generation. A check is tagged with the
//! generation it was issued in and its outcome is applied only if no date has
//! changed since, so a slow response can never overwrite a newer one.

use crate::availability::{AvailabilityDisplay, AvailabilityRequest, AvailabilityResult};
use crate::config::FormConfig;
use crate::dates::parse_input;
use crate::error::Result;
use chrono::NaiveDate;

/// An availability check that should be sent now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheck {
    /// Generation this check belongs to; pass it back to `resolve`.
    pub generation: u64,
    /// Endpoint path, e.g. `/booking/check_availability/7`
    pub url: String,
    pub request: AvailabilityRequest,
}

/// State of one booking form on one page view.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    config: FormConfig,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    check_in_min: NaiveDate,
    check_out_min: Option<NaiveDate>,
    generation: u64,
    in_flight: Option<u64>,
    display: AvailabilityDisplay,
}

impl BookingForm {
    /// A fresh form; check-in may not be earlier than `today`.
    pub fn new(config: FormConfig, today: NaiveDate) -> Self {
        Self {
            config,
            check_in: None,
            check_out: None,
            check_in_min: today,
            check_out_min: None,
            generation: 0,
            in_flight: None,
            display: AvailabilityDisplay::default(),
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    /// Earliest selectable check-in date.
    pub fn check_in_min(&self) -> NaiveDate {
        self.check_in_min
    }

    /// Earliest selectable check-out date (the current check-in, if any).
    pub fn check_out_min(&self) -> Option<NaiveDate> {
        self.check_out_min
    }

    pub fn display(&self) -> &AvailabilityDisplay {
        &self.display
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a check for the current dates is still outstanding.
    pub fn is_checking(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Check-in input changed.
    ///
    /// Raises the check-out minimum to the new check-in, clears a check-out
    /// that now precedes it, and checks availability if a check-out remains.
    pub fn set_check_in(&mut self, raw: &str) -> Option<PendingCheck> {
        self.check_in = parse_input(raw);
        self.check_out_min = self.check_in;

        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out < check_in {
                log::debug!("Clearing check-out {} before check-in {}", check_out, check_in);
                self.check_out = None;
            }
        }

        self.check_availability()
    }

    /// Check-out input changed. Checks availability if a check-in is set.
    pub fn set_check_out(&mut self, raw: &str) -> Option<PendingCheck> {
        self.check_out = parse_input(raw);
        self.check_availability()
    }

    /// Start a new generation and build a check if the form is complete.
    ///
    /// An incomplete form (missing date, room id or CSRF input) sends nothing and drops
    /// back to the initial display, so an earlier verdict cannot stay on
    /// screen for dates the server never saw.
    pub fn check_availability(&mut self) -> Option<PendingCheck> {
        self.generation += 1;

        let ready = match (
            self.config.endpoint(),
            self.config.csrf_token.as_deref(),
            self.check_in,
            self.check_out,
        ) {
            (Some(url), Some(csrf_token), Some(check_in), Some(check_out)) => {
                Some((url, csrf_token.to_string(), check_in, check_out))
            }
            _ => None,
        };

        let Some((url, csrf_token, check_in, check_out)) = ready else {
            self.in_flight = None;
            self.display = AvailabilityDisplay::default();
            return None;
        };

        self.in_flight = Some(self.generation);
        Some(PendingCheck {
            generation: self.generation,
            url,
            request: AvailabilityRequest::new(check_in, check_out, &csrf_token),
        })
    }

    /// Apply the outcome of the check tagged `generation`.
    ///
    /// Returns `false` (and changes nothing) when the dates have changed since
    /// that check was issued.
    pub fn resolve(&mut self, generation: u64, outcome: Result<AvailabilityResult>) -> bool {
        if self.in_flight != Some(generation) {
            log::debug!(
                "Dropping stale availability result (generation {}, current {})",
                generation,
                self.generation
            );
            return false;
        }
        self.in_flight = None;
        self.display = AvailabilityDisplay::from_outcome(&outcome);
        true
    }
}
