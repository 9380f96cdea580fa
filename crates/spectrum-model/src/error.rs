use std::path::PathBuf;

use spectrum_core::error::CoreError;
use spectrum_features::error::EncodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to load model from {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    #[error("input has {actual} features but the model expects {expected}")]
    Shape { expected: usize, actual: usize },

    #[error("inference failed: {0}")]
    Inference(#[from] candle_core::Error),

    #[error("unusable model output: {0}")]
    Output(#[from] CoreError),
}

#[derive(Debug, Error)]
pub enum DiagnoseError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
