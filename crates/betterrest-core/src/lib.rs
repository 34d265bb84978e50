//! # BetterRest Core Library
//!
//! This library computes a recommended bedtime from a desired wake-up time,
//! a desired amount of sleep, and daily coffee intake. A regression model
//! predicts how long the user actually needs to sleep; the bedtime is the wake
//! time minus that prediction, wrapping across midnight.
//!
//! The `betterrest` CLI is a thin presentation layer over this crate: it
//! collects inputs, calls [`estimate_bedtime`], and renders the result.
//!
//! ## Key Components
//!
//! - [`estimate_bedtime`] / [`BedtimeEstimator`]: the bedtime calculation
//! - [`SleepEstimator`]: the seam for the prediction model
//! - [`LinearSleepModel`]: the bundled linear model, loadable from TOML
//! - [`Config`]: form defaults, model selection, and display settings

pub mod bedtime;
pub mod error;
pub mod estimator;
pub mod inputs;
pub mod storage;

pub use bedtime::{
    estimate_bedtime, estimate_bedtime_unchecked, Bedtime, BedtimeEstimator, BedtimeOutcome,
    ClockStyle,
};
pub use error::{
    ConfigError, CoreError, EstimationError, ValidationError, ESTIMATION_FAILED_MESSAGE,
};
pub use estimator::{LinearSleepModel, PredictionInput, SleepEstimator};
pub use inputs::{CoffeeIntake, SleepAmount, WakeTime};
pub use storage::Config;
