//! Error types for the fitstat_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitstat_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout code outside the known set (SWM, RUN, WLK)
    #[error("Unrecognized workout code: {0:?}")]
    UnrecognizedWorkoutCode(String),

    /// Field count does not match the selected variant's constructor
    #[error("Arity mismatch for {code}: expected {expected} fields, got {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// A value used as a divisor is zero
    #[error("Division by zero: {field} must not be zero")]
    DivisionByZero { field: &'static str },

    /// A field value failed validation
    #[error("Invalid {field} ({value}): {reason}")]
    InvalidField {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Sensor feed could not be parsed
    #[error("Feed error: {0}")]
    Feed(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// One or more readings in a batch failed
    #[error("Batch error: {0}")]
    Batch(String),
}
