use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// `(x - mean) / std`, with constants fixed at training time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Standardizer {
    pub mean: f32,
    pub std: f32,
}

impl Standardizer {
    pub fn apply(&self, x: f32) -> f32 {
        (x - self.mean) / self.std
    }

    fn validate(&self, name: &str) -> Result<(), EncodeError> {
        if !self.mean.is_finite() {
            return Err(EncodeError::InvalidScaling(format!(
                "{name}: mean {} is not finite",
                self.mean
            )));
        }
        if !self.std.is_finite() || self.std <= 0.0 {
            return Err(EncodeError::InvalidScaling(format!(
                "{name}: std {} must be finite and positive",
                self.std
            )));
        }
        Ok(())
    }
}

/// Scaling for the two numeric columns.
///
/// Defaults are the population statistics of the training set: ages drawn
/// uniformly from 3–35 months and risk scores uniformly from 0–24.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingConfig {
    pub age_months: Standardizer,
    pub risk_score: Standardizer,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            age_months: Standardizer {
                mean: 19.0,
                std: 9.522,
            },
            risk_score: Standardizer {
                mean: 12.0,
                std: 7.211,
            },
        }
    }
}

impl ScalingConfig {
    pub fn validate(&self) -> Result<(), EncodeError> {
        self.age_months.validate("age_months")?;
        self.risk_score.validate("risk_score")
    }
}
