//! spectrum-instruments
//!
//! Screening questionnaire definitions and the risk score derived from them.
//! Pure data — no model dependency. Defines the questions, their allowed
//! answers, the valid age range, and the additive risk rule table.

pub mod error;
pub mod instruments;
pub mod presets;
pub mod risk;
pub mod scoring;

use spectrum_core::models::answers::AnswerSet;

use error::InstrumentError;
use scoring::{Question, ValidationError, ValidationKind, ValueRange};

/// Trait implemented by each screening questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "asd_screening").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Categorical questions, in the order the model was trained on.
    fn questions(&self) -> &[Question];

    /// Accepted range for the age field, in months.
    fn age_range(&self) -> ValueRange;

    fn question(&self, id: &str) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    /// Check an answer set against this instrument. Returns every problem
    /// found rather than stopping at the first.
    fn validate_answers(&self, answers: &AnswerSet) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let range = self.age_range();
        if !range.contains(answers.age_months) {
            errors.push(ValidationError {
                field: "age_months".to_string(),
                kind: ValidationKind::AgeOutOfRange,
                message: format!(
                    "{}: age {} months is outside range [{}, {}]",
                    self.name(),
                    answers.age_months,
                    range.min,
                    range.max,
                ),
            });
        }

        for (key, value) in &answers.answers {
            match self.question(key) {
                None => errors.push(ValidationError {
                    field: key.clone(),
                    kind: ValidationKind::UnknownQuestion,
                    message: format!("{}: unknown question '{key}'", self.name()),
                }),
                Some(question) if question.option(value).is_none() => {
                    errors.push(ValidationError {
                        field: key.clone(),
                        kind: ValidationKind::UnrecognizedValue,
                        message: format!(
                            "{}: '{value}' is not an allowed answer to {}",
                            self.name(),
                            question.name,
                        ),
                    });
                }
                Some(_) => {}
            }
        }

        for question in self.questions() {
            if answers.get(&question.id).is_none() {
                errors.push(ValidationError {
                    field: question.id.clone(),
                    kind: ValidationKind::MissingAnswer,
                    message: format!("{}: no answer for {}", self.name(), question.name),
                });
            }
        }

        errors
    }

    /// Like [`Instrument::validate_answers`], but fails on the first problem.
    fn check_answers(&self, answers: &AnswerSet) -> Result<(), InstrumentError> {
        match self.validate_answers(answers).into_iter().next() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Render the answers as plain text, one line per question, resolving
    /// each answer to its display label.
    fn to_structured_input(&self, answers: &AnswerSet) -> String {
        let mut output = format!("## {}\n\n", self.name());
        output.push_str(&format!("- Age (months): {}\n", answers.age_months));
        for question in self.questions() {
            let shown = match answers.get(&question.id) {
                Some(value) => question
                    .option(value)
                    .map(|o| o.label.clone())
                    .unwrap_or_else(|| format!("{value} (unrecognized)")),
                None => "—".to_string(),
            };
            output.push_str(&format!("- {}: {}\n", question.name, shown));
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::asd_screening::AsdScreening)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], but an unknown ID is an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
