//! On-disk classifier format.
//!
//! A safetensors file with one `layers.{i}.weight` (`[out, in]`) and an
//! optional `layers.{i}.bias` (`[out]`) per dense layer, numbered from 0
//! without gaps. Hidden layers use ReLU; the last layer's outputs go
//! through softmax.

use std::collections::HashMap;
use std::path::Path;

use candle_core::{DType, Device, Tensor};
use tracing::debug;

use crate::error::ModelError;

fn weight_key(i: usize) -> String {
    format!("layers.{i}.weight")
}

fn bias_key(i: usize) -> String {
    format!("layers.{i}.bias")
}

/// One dense layer as plain data, for writing artifacts.
#[derive(Debug, Clone)]
pub struct DenseLayer {
    pub inputs: usize,
    pub outputs: usize,
    /// Row-major `[outputs, inputs]`.
    pub weight: Vec<f32>,
    pub bias: Option<Vec<f32>>,
}

/// Weights of one layer after shape checks.
pub(crate) struct LoadedLayer {
    pub weight: Tensor,
    pub bias: Option<Tensor>,
    pub inputs: usize,
    pub outputs: usize,
}

fn load_error(path: &Path, reason: impl Into<String>) -> ModelError {
    ModelError::Load {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Write `layers` to `path` in the artifact format.
pub fn save(layers: &[DenseLayer], path: &Path) -> Result<(), ModelError> {
    let device = Device::Cpu;
    let mut tensors = HashMap::new();
    for (i, layer) in layers.iter().enumerate() {
        let weight = Tensor::from_slice(layer.weight.as_slice(), (layer.outputs, layer.inputs), &device)?;
        tensors.insert(weight_key(i), weight);
        if let Some(bias) = &layer.bias {
            tensors.insert(bias_key(i), Tensor::from_slice(bias.as_slice(), layer.outputs, &device)?);
        }
    }
    candle_core::safetensors::save(&tensors, path)?;
    Ok(())
}

/// Read and shape-check every layer in the file at `path`.
pub(crate) fn read_layers(path: &Path, device: &Device) -> Result<Vec<LoadedLayer>, ModelError> {
    if !path.is_file() {
        return Err(load_error(path, "file not found"));
    }

    let mut tensors = candle_core::safetensors::load(path, device)
        .map_err(|e| load_error(path, format!("not a readable safetensors file: {e}")))?;

    let mut layers: Vec<LoadedLayer> = Vec::new();
    while let Some(weight) = tensors.remove(&weight_key(layers.len())) {
        let i = layers.len();
        let (outputs, inputs) = weight
            .dims2()
            .map_err(|_| load_error(path, format!("{} must be 2-dimensional", weight_key(i))))?;

        if let Some(prev) = layers.last()
            && prev.outputs != inputs
        {
            return Err(load_error(
                path,
                format!("layer {i} takes {inputs} inputs but layer {} produces {}", i - 1, prev.outputs),
            ));
        }

        let bias = match tensors.remove(&bias_key(i)) {
            Some(bias) => {
                let len = bias
                    .dims1()
                    .map_err(|_| load_error(path, format!("{} must be 1-dimensional", bias_key(i))))?;
                if len != outputs {
                    return Err(load_error(
                        path,
                        format!("{} has {len} entries, expected {outputs}", bias_key(i)),
                    ));
                }
                Some(bias.to_dtype(DType::F32)?)
            }
            None => None,
        };

        layers.push(LoadedLayer {
            weight: weight.to_dtype(DType::F32)?,
            bias,
            inputs,
            outputs,
        });
    }

    if layers.is_empty() {
        return Err(load_error(path, format!("no {} tensor", weight_key(0))));
    }
    if !tensors.is_empty() {
        let mut extra: Vec<_> = tensors.keys().cloned().collect();
        extra.sort();
        debug!(?extra, "ignoring tensors outside the layer stack");
    }

    Ok(layers)
}
