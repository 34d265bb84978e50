//! Form inputs for a bedtime calculation.
//!
//! Each type validates on construction so that the presentation layer can
//! reject bad input before the estimator is ever called:
//! - [`WakeTime`]: hour and minute of the desired wake-up
//! - [`SleepAmount`]: desired sleep in hours, 2..=12 in quarter-hour steps
//! - [`CoffeeIntake`]: cups of coffee per day, 0..=20

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Desired wake-up time of day. Only hour and minute are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WakeTime(NaiveTime);

impl WakeTime {
    pub const DEFAULT_HOUR: u32 = 7;
    pub const DEFAULT_MINUTE: u32 = 0;

    /// Build a wake time from hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidTime(format!("{hour:02}:{minute:02}")))
    }

    /// Parse `HH:MM` (24-hour clock).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| ValidationError::InvalidTime(value.to_string()))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Seconds elapsed since midnight: `hour * 3600 + minute * 60`.
    pub fn seconds_since_midnight(&self) -> i64 {
        i64::from(self.hour()) * 3600 + i64::from(self.minute()) * 60
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl Default for WakeTime {
    fn default() -> Self {
        Self(
            NaiveTime::from_hms_opt(Self::DEFAULT_HOUR, Self::DEFAULT_MINUTE, 0)
                .unwrap_or(NaiveTime::MIN),
        )
    }
}

impl From<NaiveTime> for WakeTime {
    fn from(time: NaiveTime) -> Self {
        // Drop seconds: the wake time is an hour/minute pick.
        Self(time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time))
    }
}

impl FromStr for WakeTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WakeTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WakeTime> for String {
    fn from(value: WakeTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Desired amount of sleep in hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SleepAmount(f64);

impl SleepAmount {
    pub const MIN_HOURS: f64 = 2.0;
    pub const MAX_HOURS: f64 = 12.0;
    pub const STEP_HOURS: f64 = 0.25;
    pub const DEFAULT_HOURS: f64 = 8.0;

    pub fn new(hours: f64) -> Result<Self, ValidationError> {
        if !hours.is_finite() || !(Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours) {
            return Err(ValidationError::SleepOutOfRange {
                hours,
                min: Self::MIN_HOURS,
                max: Self::MAX_HOURS,
            });
        }
        if (hours / Self::STEP_HOURS).fract() != 0.0 {
            return Err(ValidationError::SleepOffStep {
                hours,
                step: Self::STEP_HOURS,
            });
        }
        Ok(Self(hours))
    }

    pub fn hours(&self) -> f64 {
        self.0
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self(Self::DEFAULT_HOURS)
    }
}

impl TryFrom<f64> for SleepAmount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SleepAmount> for f64 {
    fn from(value: SleepAmount) -> Self {
        value.0
    }
}

impl FromStr for SleepAmount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hours = s.trim().parse::<f64>().map_err(|_| ValidationError::InvalidValue {
            field: "sleep_amount".into(),
            message: format!("'{s}' is not a number"),
        })?;
        Self::new(hours)
    }
}

impl fmt::Display for SleepAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours", self.0)
    }
}

/// Daily coffee intake in cups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CoffeeIntake(u32);

impl CoffeeIntake {
    pub const MAX_CUPS: u32 = 20;
    pub const DEFAULT_CUPS: u32 = 2;

    pub fn new(cups: u32) -> Result<Self, ValidationError> {
        if cups > Self::MAX_CUPS {
            return Err(ValidationError::CoffeeOutOfRange {
                cups,
                max: Self::MAX_CUPS,
            });
        }
        Ok(Self(cups))
    }

    pub fn cups(&self) -> u32 {
        self.0
    }
}

impl Default for CoffeeIntake {
    fn default() -> Self {
        Self(Self::DEFAULT_CUPS)
    }
}

impl TryFrom<u32> for CoffeeIntake {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CoffeeIntake> for u32 {
    fn from(value: CoffeeIntake) -> Self {
        value.0
    }
}

impl FromStr for CoffeeIntake {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cups = s.trim().parse::<u32>().map_err(|_| ValidationError::InvalidValue {
            field: "coffee_intake".into(),
            message: format!("'{s}' is not a whole number of cups"),
        })?;
        Self::new(cups)
    }
}

impl fmt::Display for CoffeeIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 cup")
        } else {
            write!(f, "{} cups", self.0)
        }
    }
}
