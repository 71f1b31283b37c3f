//! Custom error types for ridehail
//!
//! Booking guards never fail loudly; these errors only come from the
//! process boundary (terminal, config file, command line input).

use thiserror::Error;

/// Main error type for the ridehail application
#[derive(Error, Debug)]
pub enum RideError {
    /// Ride id not present in the catalog
    #[error("Unknown ride '{ride}'.\n\n  → Available rides: {available}\n  → Run 'ridehail rides' to see the full catalog.")]
    UnknownRide {
        /// The id that was requested
        ride: String,
        /// Comma separated catalog ids
        available: String,
    },

    /// The booking was torn down before a driver was assigned
    #[error("Driver assignment was interrupted before it completed.")]
    DispatchInterrupted,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("Configuration file is invalid: {0}\n\n  → Run 'ridehail config path' to locate it.")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for RideError {
    fn from(err: toml::de::Error) -> Self {
        RideError::Toml(err.to_string())
    }
}

/// Result type alias using RideError
pub type Result<T> = std::result::Result<T, RideError>;
