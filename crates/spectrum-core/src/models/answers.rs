use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One completed screening questionnaire.
///
/// Categorical answers are keyed by question id (e.g. `"eye_contact"`) and
/// hold either the training token (`"Evitativo"`) or its display label
/// (`"Avoidant"`). Nothing here checks the values against the
/// questionnaire; that is the encoder's and the instrument's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet {
    pub age_months: f32,
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new(age_months: f32) -> Self {
        Self {
            age_months,
            answers: BTreeMap::new(),
        }
    }

    /// Builder-style insert, handy for fixtures and presets.
    pub fn with(mut self, question_id: &str, value: &str) -> Self {
        self.set(question_id, value);
        self
    }

    pub fn set(&mut self, question_id: &str, value: &str) {
        self.answers
            .insert(question_id.to_string(), value.to_string());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
