use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::label::DiagnosticLabel;
use crate::error::CoreError;

/// Output of one forward pass, consumed by the caller and then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub label: DiagnosticLabel,
    /// Probability of `label`, in [0, 1].
    pub confidence: f32,
    /// One probability per label, in [`DiagnosticLabel::ALL`] order.
    pub distribution: Vec<f32>,
}

impl PredictionResult {
    /// Pick the arg-max label. Ties go to the lowest index; non-finite
    /// entries are rejected.
    pub fn from_distribution(distribution: Vec<f32>) -> Result<Self, CoreError> {
        if distribution.len() != DiagnosticLabel::COUNT {
            return Err(CoreError::LabelCount {
                expected: DiagnosticLabel::COUNT,
                actual: distribution.len(),
            });
        }

        if let Some((index, value)) = distribution
            .iter()
            .copied()
            .enumerate()
            .find(|(_, p)| !p.is_finite())
        {
            return Err(CoreError::NonFiniteProbability { index, value });
        }

        let mut best = 0;
        for (i, p) in distribution.iter().enumerate().skip(1) {
            if *p > distribution[best] {
                best = i;
            }
        }

        // best < COUNT was checked above
        let label = DiagnosticLabel::ALL[best];
        Ok(Self {
            label,
            confidence: distribution[best],
            distribution,
        })
    }

    /// `(label, probability)` pairs in label order.
    pub fn probabilities(&self) -> impl Iterator<Item = (DiagnosticLabel, f32)> + '_ {
        DiagnosticLabel::ALL
            .iter()
            .copied()
            .zip(self.distribution.iter().copied())
    }
}
