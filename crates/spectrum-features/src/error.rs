use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("feature vector has {actual} values but the model expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("'{value}' is not an allowed answer to '{question}'")]
    UnrecognizedValue { question: String, value: String },

    #[error("'{question}' has no answer")]
    MissingAnswer { question: String },

    #[error("invalid scaling parameters: {0}")]
    InvalidScaling(String),
}
