#![allow(dead_code)]

use std::path::PathBuf;

use spectrum_model::artifact::{self, DenseLayer};
use tempfile::TempDir;

pub const WIDTH: usize = 55;
pub const LABELS: usize = 5;
const RISK_FEATURE: usize = 54;

/// Single dense layer whose logits depend only on the standardized risk
/// score `x`: `logit_k = k * (x + 1.7) - 0.55 * k^2` for the four ordered
/// classes, and a large negative constant for "Indeterminate". The arg-max
/// class rises monotonically with the risk score.
pub fn monotonic_layer() -> DenseLayer {
    let mut weight = vec![0.0; LABELS * WIDTH];
    let mut bias = vec![0.0; LABELS];
    for k in 0..4 {
        let kf = k as f32;
        weight[k * WIDTH + RISK_FEATURE] = kf;
        bias[k] = kf * 1.7 - 0.55 * kf * kf;
    }
    bias[4] = -10.0;
    DenseLayer {
        inputs: WIDTH,
        outputs: LABELS,
        weight,
        bias: Some(bias),
    }
}

/// Dense layer with every weight set to `value` and no bias.
pub fn constant_layer(inputs: usize, outputs: usize, value: f32) -> DenseLayer {
    DenseLayer {
        inputs,
        outputs,
        weight: vec![value; inputs * outputs],
        bias: None,
    }
}

pub fn write_model(dir: &TempDir, name: &str, layers: &[DenseLayer]) -> PathBuf {
    let path = dir.path().join(name);
    artifact::save(layers, &path).unwrap();
    path
}
