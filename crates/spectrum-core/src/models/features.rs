use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Model input, laid out exactly as the classifier was trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// Fit `values` to `width`: pad with `fill` or drop the excess.
    ///
    /// Used for hand-entered slider input, where the caller supplies fewer
    /// values than the model expects.
    pub fn fitted(values: &[f32], width: usize, fill: f32) -> Self {
        let mut out: Vec<f32> = values.iter().copied().take(width).collect();
        out.resize(width, fill);
        Self(out)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }
}

impl AsRef<[f32]> for FeatureVector {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}
