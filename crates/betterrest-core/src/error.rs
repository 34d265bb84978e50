//! Core error types for betterrest-core.
//!
//! Estimation failures are deliberately coarse: every way the sleep model can
//! fail collapses into one [`EstimationError`] whose user-facing message never
//! changes. The diagnostic reason is kept for logs only.

use std::path::PathBuf;
use thiserror::Error;

/// User-facing message for any failed bedtime calculation.
pub const ESTIMATION_FAILED_MESSAGE: &str = "There was an error calculating your bedtime.";

/// Core error type for betterrest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Estimation errors
    #[error(transparent)]
    Estimation(#[from] EstimationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The estimator could not produce a prediction.
///
/// Covers a missing or corrupt model artifact, invalid model state, and
/// non-finite predictions alike. `Display` always renders
/// [`ESTIMATION_FAILED_MESSAGE`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", ESTIMATION_FAILED_MESSAGE)]
pub struct EstimationError {
    reason: String,
}

impl EstimationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Diagnostic detail, for logging.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors for form inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Wake time could not be parsed
    #[error("Invalid wake time '{0}': expected HH:MM")]
    InvalidTime(String),

    /// Sleep amount outside the accepted range
    #[error("Sleep amount {hours} is out of range ({min}..={max} hours)")]
    SleepOutOfRange { hours: f64, min: f64, max: f64 },

    /// Sleep amount not on the stepper grid
    #[error("Sleep amount {hours} must be a multiple of {step} hours")]
    SleepOffStep { hours: f64, step: f64 },

    /// Coffee intake outside the accepted range
    #[error("Coffee intake {cups} is out of range (0..={max} cups)")]
    CoffeeOutOfRange { cups: u32, max: u32 },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
