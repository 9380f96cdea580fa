use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The five diagnostic categories the classifier was trained to emit.
///
/// Declaration order is the model's output order and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiagnosticLabel {
    TypicalDevelopment,
    AsdLevel1,
    AsdLevel2,
    AsdLevel3,
    Indeterminate,
}

impl DiagnosticLabel {
    pub const ALL: [DiagnosticLabel; 5] = [
        DiagnosticLabel::TypicalDevelopment,
        DiagnosticLabel::AsdLevel1,
        DiagnosticLabel::AsdLevel2,
        DiagnosticLabel::AsdLevel3,
        DiagnosticLabel::Indeterminate,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            DiagnosticLabel::TypicalDevelopment => "Typical development",
            DiagnosticLabel::AsdLevel1 => "ASD - Level 1",
            DiagnosticLabel::AsdLevel2 => "ASD - Level 2",
            DiagnosticLabel::AsdLevel3 => "ASD - Level 3",
            DiagnosticLabel::Indeterminate => "Indeterminate",
        }
    }

    /// Label as it appeared in the training data.
    pub fn training_name(self) -> &'static str {
        match self {
            DiagnosticLabel::TypicalDevelopment => "Desarrollo típico",
            DiagnosticLabel::AsdLevel1 => "TEA - Nivel 1",
            DiagnosticLabel::AsdLevel2 => "TEA - Nivel 2",
            DiagnosticLabel::AsdLevel3 => "TEA - Nivel 3",
            DiagnosticLabel::Indeterminate => "Indeterminado",
        }
    }

    /// ASD severity level (1–3), or `None` for the non-ASD categories.
    pub fn asd_level(self) -> Option<u8> {
        match self {
            DiagnosticLabel::AsdLevel1 => Some(1),
            DiagnosticLabel::AsdLevel2 => Some(2),
            DiagnosticLabel::AsdLevel3 => Some(3),
            DiagnosticLabel::TypicalDevelopment | DiagnosticLabel::Indeterminate => None,
        }
    }
}

impl fmt::Display for DiagnosticLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
