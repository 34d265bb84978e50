//! Sleep estimator seam.
//!
//! The bedtime calculation depends on a pre-trained regression model only
//! through [`SleepEstimator`]. The bundled implementation is
//! [`LinearSleepModel`]; tests inject deterministic stand-ins.

mod linear;

pub use linear::{LinearSleepModel, BUNDLED_MODEL};

use serde::{Deserialize, Serialize};

use crate::error::EstimationError;
use crate::inputs::{CoffeeIntake, SleepAmount, WakeTime};

/// Features handed to the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Wake time as seconds since midnight
    pub wake_seconds: i64,
    /// Desired sleep in hours
    pub estimated_sleep: f64,
    /// Cups of coffee per day
    pub coffee: f64,
}

impl PredictionInput {
    pub fn new(wake: WakeTime, sleep: SleepAmount, coffee: CoffeeIntake) -> Self {
        Self {
            wake_seconds: wake.seconds_since_midnight(),
            estimated_sleep: sleep.hours(),
            coffee: f64::from(coffee.cups()),
        }
    }
}

/// Predicts how long the user actually needs to sleep.
pub trait SleepEstimator {
    /// Returns the predicted sleep duration in seconds.
    fn predict(&self, input: &PredictionInput) -> Result<f64, EstimationError>;
}

impl<E: SleepEstimator + ?Sized> SleepEstimator for &E {
    fn predict(&self, input: &PredictionInput) -> Result<f64, EstimationError> {
        (**self).predict(input)
    }
}

impl<E: SleepEstimator + ?Sized> SleepEstimator for Box<E> {
    fn predict(&self, input: &PredictionInput) -> Result<f64, EstimationError> {
        (**self).predict(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_input_converts_form_values() {
        let input = PredictionInput::new(
            WakeTime::from_hm(6, 30).unwrap(),
            SleepAmount::new(7.5).unwrap(),
            CoffeeIntake::new(3).unwrap(),
        );
        assert_eq!(input.wake_seconds, 23_400);
        assert_eq!(input.estimated_sleep, 7.5);
        assert_eq!(input.coffee, 3.0);
    }

    #[test]
    fn boxed_estimator_delegates() {
        struct Fixed;
        impl SleepEstimator for Fixed {
            fn predict(&self, _input: &PredictionInput) -> Result<f64, EstimationError> {
                Ok(42.0)
            }
        }

        let boxed: Box<dyn SleepEstimator> = Box::new(Fixed);
        let input = PredictionInput::new(
            WakeTime::default(),
            SleepAmount::default(),
            CoffeeIntake::default(),
        );
        assert_eq!(boxed.predict(&input), Ok(42.0));
    }
}
