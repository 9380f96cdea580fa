use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("expected a distribution over {expected} labels, got {actual} entries")]
    LabelCount { expected: usize, actual: usize },

    #[error("probability for label {index} is not finite ({value})")]
    NonFiniteProbability { index: usize, value: f32 },
}
