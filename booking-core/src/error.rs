/// Error types for the booking pages
use thiserror::Error;

/// Main error type for availability checks and form configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("Network request failed: {0}")]
    Network(String),

    /// The response body was not the expected availability JSON
    #[error("Failed to decode availability response: {0}")]
    Decode(String),

    /// A date value was not in `YYYY-MM-DD` form
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The form carries no room identifier
    #[error("Booking form has no room id")]
    MissingRoomId,

    /// The requested stay ends before it starts
    #[error("Check-out date {check_out} is before check-in date {check_in}")]
    InvertedRange { check_in: String, check_out: String },

    /// Unknown chart or other configuration problem
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BookingError {
    pub fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    pub fn decode<E: std::fmt::Display>(err: E) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Type alias for Results using BookingError
pub type Result<T> = std::result::Result<T, BookingError>;
