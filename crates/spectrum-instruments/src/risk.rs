//! Additive risk score over the scored screening items.
//!
//! Each scored question maps its answers to 0–3 points, most severe answer
//! highest. The total is fed back into the model as a numeric feature, so
//! the table below must stay identical to the one used for training.

use std::fmt;

use serde::{Deserialize, Serialize};
use spectrum_core::models::answers::AnswerSet;
use ts_rs::TS;

use crate::Instrument;
use crate::instruments::asd_screening::AsdScreening;

/// `(question id, [(training token, points)])`. Tokens not listed score 0.
pub const RISK_RULES: &[(&str, &[(&str, u8)])] = &[
    ("language", &[("No verbal", 3), ("Ecolalia", 2), ("Frases simples", 1)]),
    ("nonverbal_communication", &[("Ausente", 3), ("Muy limitada", 2), ("Limitada", 1)]),
    ("eye_contact", &[("Evitativo", 2), ("Intermitente", 1)]),
    ("social_interaction", &[("Ausente", 3), ("Pasiva", 2), ("Inapropiada", 1)]),
    ("response_to_name", &[("Nunca", 2), ("A veces", 1)]),
    ("stereotypies", &[("Muy frecuentes", 3), ("Frecuentes", 2), ("Ocasionales", 1)]),
    ("restricted_interests", &[("Muy intensos", 2), ("Persistentes", 1)]),
    ("emotional_regulation", &[("Autolesiva", 3), ("Crisis frecuentes", 2), ("Ocasionales", 1)]),
    ("intellectual_disability", &[("Sí", 2)]),
    ("adhd", &[("Sí", 1)]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MAX: RiskScore = RiskScore(24);

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX.0).then_some(RiskScore(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn band(self) -> RiskBand {
        RiskBand::for_score(self)
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX.0)
    }
}

/// Score the answer set. Missing or unrecognized answers contribute nothing.
pub fn score(answers: &AnswerSet) -> RiskScore {
    let instrument = AsdScreening;
    let total: u8 = RISK_RULES
        .iter()
        .filter_map(|(question_id, points)| {
            let value = answers.get(question_id)?;
            let token = &instrument.question(question_id)?.option(value)?.value;
            points
                .iter()
                .find(|(t, _)| *t == token.as_str())
                .map(|(_, p)| *p)
        })
        .sum();
    RiskScore(total.min(RiskScore::MAX.0))
}

/// Coarse risk band shown next to the score.
///
/// Display only: it is derived from the risk score alone and can disagree
/// with the classifier's label. It is never used to adjust the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    VeryLow,
    Mild,
    Moderate,
    High,
    VeryHigh,
}

impl RiskBand {
    pub fn for_score(score: RiskScore) -> Self {
        match score.value() {
            18.. => RiskBand::VeryHigh,
            15..=17 => RiskBand::High,
            10..=14 => RiskBand::Moderate,
            6..=9 => RiskBand::Mild,
            _ => RiskBand::VeryLow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RiskBand::VeryLow => "Very low",
            RiskBand::Mild => "Mild",
            RiskBand::Moderate => "Moderate",
            RiskBand::High => "High",
            RiskBand::VeryHigh => "Very high",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
