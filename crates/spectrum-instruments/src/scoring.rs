use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// One allowed answer to a categorical question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    /// Category string exactly as it appeared in the training data.
    pub value: String,
    /// English display label.
    pub label: String,
}

/// A categorical question and its enumeration of allowed answers.
///
/// `options` are listed from most to least severe. That is NOT the order of
/// the one-hot slots; see [`Question::encoding_order`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub name: String,
    /// Column header used when the model was trained.
    pub training_column: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Find the option matching `value`, by training token or display label.
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options
            .iter()
            .find(|o| o.value == value || o.label == value)
    }

    /// Options sorted the way the training one-hot encoder laid out its
    /// categories: lexicographic on the training token.
    pub fn encoding_order(&self) -> Vec<&AnswerOption> {
        let mut sorted: Vec<&AnswerOption> = self.options.iter().collect();
        sorted.sort_by(|a, b| a.value.cmp(&b.value));
        sorted
    }

    /// Slot of `value` inside this question's one-hot segment.
    pub fn encoding_slot(&self, value: &str) -> Option<usize> {
        let token = &self.option(value)?.value;
        self.encoding_order().iter().position(|o| &o.value == token)
    }
}

/// Inclusive range for a numeric field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationKind {
    UnknownQuestion,
    UnrecognizedValue,
    MissingAnswer,
    AgeOutOfRange,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationKind,
    pub message: String,
}
