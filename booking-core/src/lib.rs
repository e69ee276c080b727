//! Core logic for the hotel booking pages.
//!
//! Everything here is platform independent so it can be unit tested natively
//! and shared by the WASM apps and the CLI:
//!
//! - `dates`: `YYYY-MM-DD` parsing/formatting used by the date inputs
//! - `controller`: the booking form controller (check-in/check-out rules and
//!   request generations)
//! - `availability`: request/response types for the availability endpoint and
//!   how a result is rendered
//! - `charts`: Chart.js configurations for the admin dashboard
//! - `api` (feature `api`): `reqwest` transport for native callers
//!
//! # Usage
//!
//! ```rust
//! use booking_core::config::FormConfig;
//! use booking_core::controller::BookingForm;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mut form = BookingForm::new(FormConfig::for_room("7", "token"), today);
//!
//! assert!(form.set_check_in("2024-06-10").is_none());
//! let pending = form.set_check_out("2024-06-15").unwrap();
//! assert_eq!(pending.url, "/booking/check_availability/7");
//! ```

pub mod availability;
pub mod charts;
pub mod config;
pub mod controller;
pub mod dates;
pub mod error;

#[cfg(feature = "api")]
pub mod api;

pub use error::{BookingError, Result};
