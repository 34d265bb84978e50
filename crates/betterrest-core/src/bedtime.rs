//! Bedtime calculation.
//!
//! The bedtime is the wake time minus the sleep duration predicted by a
//! [`SleepEstimator`], wrapping across midnight. It is displayed as hour and
//! minute only; seconds are truncated.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EstimationError, ValidationError, ESTIMATION_FAILED_MESSAGE};
use crate::estimator::{PredictionInput, SleepEstimator};
use crate::inputs::{CoffeeIntake, SleepAmount, WakeTime};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// How a time of day is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockStyle {
    /// `22:42`
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// `10:42 PM`
    #[serde(rename = "12h")]
    TwelveHour,
}

impl ClockStyle {
    pub fn format(&self, time: NaiveTime) -> String {
        match self {
            ClockStyle::TwentyFourHour => time.format("%H:%M").to_string(),
            ClockStyle::TwelveHour => time.format("%-I:%M %p").to_string(),
        }
    }
}

impl FromStr for ClockStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "24h" | "24" => Ok(ClockStyle::TwentyFourHour),
            "12h" | "12" => Ok(ClockStyle::TwelveHour),
            other => Err(ValidationError::InvalidValue {
                field: "clock".into(),
                message: format!("'{other}' is not one of 12h, 24h"),
            }),
        }
    }
}

impl fmt::Display for ClockStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockStyle::TwentyFourHour => write!(f, "24h"),
            ClockStyle::TwelveHour => write!(f, "12h"),
        }
    }
}

/// A recommended bedtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bedtime {
    time: NaiveTime,
    wake: WakeTime,
    predicted_sleep_seconds: f64,
}

impl Bedtime {
    /// Subtract `predicted_sleep_seconds` from `wake`, wrapping at midnight.
    ///
    /// Returns `None` for a non-finite prediction.
    pub fn from_prediction(wake: WakeTime, predicted_sleep_seconds: f64) -> Option<Self> {
        if !predicted_sleep_seconds.is_finite() {
            return None;
        }
        // Reduce first so any finite prediction fits in a Duration.
        let within_day = predicted_sleep_seconds.rem_euclid(SECONDS_PER_DAY);
        // Round to whole milliseconds so float noise such as
        // 8.3 * 3600 = 29880.000000000004 does not cost a displayed minute.
        // Display truncation happens after this rounding.
        let millis = (within_day * 1000.0).round() as i64;
        let (time, _) = wake
            .as_naive_time()
            .overflowing_sub_signed(Duration::milliseconds(millis));
        Some(Self {
            time,
            wake,
            predicted_sleep_seconds,
        })
    }

    /// Full-precision time of day, including any seconds.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn wake(&self) -> WakeTime {
        self.wake
    }

    pub fn predicted_sleep_seconds(&self) -> f64 {
        self.predicted_sleep_seconds
    }

    /// Hour and minute. Seconds are truncated, after the prediction was
    /// rounded to the millisecond.
    pub fn format(&self, style: ClockStyle) -> String {
        style.format(self.time)
    }
}

impl fmt::Display for Bedtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(ClockStyle::TwentyFourHour))
    }
}

/// Compute the recommended bedtime using `estimator`.
///
/// # Errors
///
/// Returns an [`EstimationError`] if the estimator fails or its prediction is
/// not a finite number. No partial result is produced.
pub fn estimate_bedtime<E>(
    estimator: &E,
    wake: WakeTime,
    sleep: SleepAmount,
    coffee: CoffeeIntake,
) -> Result<Bedtime, EstimationError>
where
    E: SleepEstimator + ?Sized,
{
    estimate_bedtime_unchecked(estimator, wake, sleep.hours(), coffee.cups())
}

/// Like [`estimate_bedtime`], but takes raw sleep hours and coffee cups.
///
/// Nothing here checks the form ranges; callers that skip the validated
/// input types own that responsibility. Whatever the estimator makes of an
/// out-of-range input is what the bedtime is computed from.
pub fn estimate_bedtime_unchecked<E>(
    estimator: &E,
    wake: WakeTime,
    sleep_hours: f64,
    coffee_cups: u32,
) -> Result<Bedtime, EstimationError>
where
    E: SleepEstimator + ?Sized,
{
    let input = PredictionInput {
        wake_seconds: wake.seconds_since_midnight(),
        estimated_sleep: sleep_hours,
        coffee: f64::from(coffee_cups),
    };
    let predicted = estimator.predict(&input).inspect_err(|e| {
        tracing::warn!(reason = e.reason(), "sleep estimator failed");
    })?;

    let bedtime = Bedtime::from_prediction(wake, predicted).ok_or_else(|| {
        tracing::warn!(predicted, "sleep estimator returned a non-finite prediction");
        EstimationError::new("prediction is not finite")
    })?;

    tracing::debug!(
        wake = %wake,
        sleep_hours,
        coffee_cups,
        predicted_seconds = predicted,
        bedtime = %bedtime,
        "estimated bedtime"
    );
    Ok(bedtime)
}

/// Owns an estimator and answers bedtime requests with it.
#[derive(Debug, Clone)]
pub struct BedtimeEstimator<E> {
    estimator: E,
}

impl<E: SleepEstimator> BedtimeEstimator<E> {
    pub fn new(estimator: E) -> Self {
        Self { estimator }
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn estimate(
        &self,
        wake: WakeTime,
        sleep: SleepAmount,
        coffee: CoffeeIntake,
    ) -> Result<Bedtime, EstimationError> {
        estimate_bedtime(&self.estimator, wake, sleep, coffee)
    }
}

/// What the user is shown after a calculation: a title and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedtimeOutcome {
    pub success: bool,
    pub title: String,
    pub message: String,
}

impl BedtimeOutcome {
    pub const SUCCESS_TITLE: &'static str = "Your ideal bedtime is";
    pub const ERROR_TITLE: &'static str = "Error";

    pub fn from_result(result: &Result<Bedtime, EstimationError>, style: ClockStyle) -> Self {
        match result {
            Ok(bedtime) => Self {
                success: true,
                title: Self::SUCCESS_TITLE.to_string(),
                message: bedtime.format(style),
            },
            Err(_) => Self {
                success: false,
                title: Self::ERROR_TITLE.to_string(),
                message: ESTIMATION_FAILED_MESSAGE.to_string(),
            },
        }
    }
}
