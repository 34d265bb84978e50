//! Linear sleep model loaded from a TOML artifact.
//!
//! Formula: actual_sleep = intercept + w·wake_seconds + s·estimated_sleep + c·coffee

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{PredictionInput, SleepEstimator};
use crate::error::EstimationError;

/// Artifact shipped with the library.
pub const BUNDLED_MODEL: &str = include_str!("../../models/sleep_calculator.toml");

/// Linear regression over the three form features. Output is seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSleepModel {
    pub name: String,
    pub intercept: f64,
    pub wake_coefficient: f64,
    pub estimated_sleep_coefficient: f64,
    pub coffee_coefficient: f64,
}

impl LinearSleepModel {
    /// The model embedded in the library.
    pub fn bundled() -> Result<Self, EstimationError> {
        Self::from_toml_str(BUNDLED_MODEL)
    }

    /// Read an artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns an [`EstimationError`] if the file is missing, unreadable, or
    /// does not describe a valid model.
    pub fn load(path: &Path) -> Result<Self, EstimationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EstimationError::new(format!("cannot read model {}: {e}", path.display()))
        })?;
        let model = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), name = %model.name, "loaded sleep model");
        Ok(model)
    }

    /// Parse and validate an artifact.
    pub fn from_toml_str(content: &str) -> Result<Self, EstimationError> {
        let model: Self = toml::from_str(content)
            .map_err(|e| EstimationError::new(format!("malformed model artifact: {e}")))?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), EstimationError> {
        if self.name.trim().is_empty() {
            return Err(EstimationError::new("model name is empty"));
        }
        let coefficients = [
            ("intercept", self.intercept),
            ("wake_coefficient", self.wake_coefficient),
            ("estimated_sleep_coefficient", self.estimated_sleep_coefficient),
            ("coffee_coefficient", self.coffee_coefficient),
        ];
        for (field, value) in coefficients {
            if !value.is_finite() {
                return Err(EstimationError::new(format!("{field} is not finite")));
            }
        }
        Ok(())
    }
}

impl SleepEstimator for LinearSleepModel {
    fn predict(&self, input: &PredictionInput) -> Result<f64, EstimationError> {
        let seconds = self.intercept
            + self.wake_coefficient * input.wake_seconds as f64
            + self.estimated_sleep_coefficient * input.estimated_sleep
            + self.coffee_coefficient * input.coffee;

        if !seconds.is_finite() {
            return Err(EstimationError::new("prediction is not finite"));
        }
        Ok(seconds)
    }
}
