use serde::{Deserialize, Serialize};
use spectrum_core::models::answers::AnswerSet;
use spectrum_core::models::features::FeatureVector;
use spectrum_instruments::Instrument;
use spectrum_instruments::instruments::asd_screening::AsdScreening;
use spectrum_instruments::risk::{self, RiskScore};
use spectrum_instruments::scoring::Question;
use tracing::{debug, warn};

use crate::error::EncodeError;
use crate::layout::FeatureLayout;
use crate::scaling::ScalingConfig;

/// What to do with an answer that is missing or not in its question's
/// enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownValuePolicy {
    /// Encode the question as absent (all-zero segment) and log a warning.
    #[default]
    Lenient,
    /// Fail with [`EncodeError::UnrecognizedValue`] or
    /// [`EncodeError::MissingAnswer`].
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EncoderConfig {
    #[serde(default)]
    pub scaling: ScalingConfig,
    #[serde(default)]
    pub unknown_values: UnknownValuePolicy,
}

/// Encodes answer sets for a classifier with a fixed input width.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    questions: Vec<Question>,
    layout: FeatureLayout,
    config: EncoderConfig,
    input_width: usize,
}

impl FeatureEncoder {
    /// `input_width` is the width the loaded model declares.
    pub fn new(config: EncoderConfig, input_width: usize) -> Result<Self, EncodeError> {
        config.scaling.validate()?;
        let questions = AsdScreening.questions().to_vec();
        let layout = FeatureLayout::for_questions(&questions);
        Ok(Self {
            questions,
            layout,
            config,
            input_width,
        })
    }

    pub fn layout(&self) -> &FeatureLayout {
        &self.layout
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    /// Fails if this questionnaire cannot produce `input_width` features.
    pub fn check_width(&self) -> Result<(), EncodeError> {
        if self.layout.width != self.input_width {
            return Err(EncodeError::DimensionMismatch {
                expected: self.input_width,
                actual: self.layout.width,
            });
        }
        Ok(())
    }

    pub fn encode(&self, answers: &AnswerSet) -> Result<FeatureVector, EncodeError> {
        self.encode_scored(answers).map(|(vector, _)| vector)
    }

    /// Encode, also returning the risk score that went into the vector.
    pub fn encode_scored(
        &self,
        answers: &AnswerSet,
    ) -> Result<(FeatureVector, RiskScore), EncodeError> {
        let mut values = vec![0.0f32; self.layout.width];

        for (question, segment) in self.questions.iter().zip(&self.layout.segments) {
            let Some(value) = answers.get(&question.id) else {
                match self.config.unknown_values {
                    UnknownValuePolicy::Strict => {
                        return Err(EncodeError::MissingAnswer {
                            question: question.id.clone(),
                        });
                    }
                    UnknownValuePolicy::Lenient => {
                        warn!(question = %question.id, "no answer; encoding as absent");
                        continue;
                    }
                }
            };
            match question.encoding_slot(value) {
                Some(slot) => values[segment.offset + slot] = 1.0,
                None => match self.config.unknown_values {
                    UnknownValuePolicy::Strict => {
                        return Err(EncodeError::UnrecognizedValue {
                            question: question.id.clone(),
                            value: value.to_string(),
                        });
                    }
                    UnknownValuePolicy::Lenient => {
                        warn!(question = %question.id, value, "unrecognized answer; encoding as absent");
                    }
                },
            }
        }

        let risk_score = risk::score(answers);
        let scaling = &self.config.scaling;
        let numeric_offset = self.layout.width - 2;
        values[numeric_offset] = scaling.age_months.apply(answers.age_months);
        values[numeric_offset + 1] = scaling.risk_score.apply(f32::from(risk_score.value()));

        if values.len() != self.input_width {
            return Err(EncodeError::DimensionMismatch {
                expected: self.input_width,
                actual: values.len(),
            });
        }

        debug!(width = values.len(), risk = risk_score.value(), "answers encoded");
        Ok((FeatureVector::new(values), risk_score))
    }
}
