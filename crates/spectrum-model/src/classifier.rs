use std::path::{Path, PathBuf};

use candle_core::{D, Device, Module, Tensor};
use candle_nn::Linear;
use spectrum_core::models::features::FeatureVector;
use spectrum_core::models::label::DiagnosticLabel;
use spectrum_core::models::prediction::PredictionResult;
use tracing::{debug, info};

use crate::artifact;
use crate::error::ModelError;

/// A loaded screening classifier.
///
/// Read-only after [`Classifier::load`]; `predict` takes `&self` and may be
/// called from several threads at once.
#[derive(Debug)]
pub struct Classifier {
    layers: Vec<Linear>,
    input_width: usize,
    output_width: usize,
    device: Device,
    path: PathBuf,
}

impl Classifier {
    /// Load the artifact at `path`. The output width must match the number
    /// of diagnostic labels.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let device = Device::Cpu;
        let loaded = artifact::read_layers(path, &device)?;

        // read_layers never returns an empty stack
        let input_width = loaded[0].inputs;
        let output_width = loaded[loaded.len() - 1].outputs;
        if output_width != DiagnosticLabel::COUNT {
            return Err(ModelError::Load {
                path: path.to_path_buf(),
                reason: format!(
                    "model produces {output_width} outputs but there are {} diagnostic labels",
                    DiagnosticLabel::COUNT
                ),
            });
        }

        let layers: Vec<Linear> = loaded
            .into_iter()
            .map(|l| Linear::new(l.weight, l.bias))
            .collect();

        info!(
            path = %path.display(),
            layers = layers.len(),
            input_width,
            output_width,
            "classifier loaded"
        );

        Ok(Self {
            layers,
            input_width,
            output_width,
            device,
            path: path.to_path_buf(),
        })
    }

    /// Number of features the model was trained on.
    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn output_width(&self) -> usize {
        self.output_width
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One forward pass. The label is the arg-max of the softmax output.
    pub fn predict(&self, vector: &FeatureVector) -> Result<PredictionResult, ModelError> {
        if vector.len() != self.input_width {
            return Err(ModelError::Shape {
                expected: self.input_width,
                actual: vector.len(),
            });
        }

        let mut xs = Tensor::from_slice(vector.as_slice(), (1, self.input_width), &self.device)?;
        let last = self.layers.len() - 1;
        for (i, layer) in self.layers.iter().enumerate() {
            xs = layer.forward(&xs)?;
            if i < last {
                xs = xs.relu()?;
            }
        }

        let probs = candle_nn::ops::softmax(&xs, D::Minus1)?;
        let distribution = probs.squeeze(0)?.to_vec1::<f32>()?;
        let result = PredictionResult::from_distribution(distribution)?;

        debug!(label = %result.label, confidence = result.confidence, "prediction");
        Ok(result)
    }
}
