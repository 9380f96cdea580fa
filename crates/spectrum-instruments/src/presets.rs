//! Fixed answer sets for demos and smoke checks.

use spectrum_core::models::answers::AnswerSet;

/// Mid-severity profile used when no answers are supplied.
pub fn representative() -> AnswerSet {
    AnswerSet::new(30.0)
        .with("sex", "Masculino")
        .with("language", "Frases simples")
        .with("nonverbal_communication", "Limitada")
        .with("eye_contact", "Intermitente")
        .with("social_interaction", "Pasiva")
        .with("response_to_name", "A veces")
        .with("stereotypies", "Frecuentes")
        .with("restricted_interests", "Persistentes")
        .with("emotional_regulation", "Ocasionales")
        .with("adhd", "No")
        .with("intellectual_disability", "No")
        .with("sensory_hypersensitivity", "Moderada")
        .with("sleep_disorders", "Leve")
        .with("selective_eating", "Moderada")
        .with("family_history", "TEA")
}

/// Every item at its least severe answer.
pub fn typical() -> AnswerSet {
    AnswerSet::new(24.0)
        .with("sex", "Femenino")
        .with("language", "Lenguaje funcional")
        .with("nonverbal_communication", "Adecuada")
        .with("eye_contact", "Natural")
        .with("social_interaction", "Adecuada")
        .with("response_to_name", "Siempre")
        .with("stereotypies", "Ausentes")
        .with("restricted_interests", "Ausentes")
        .with("emotional_regulation", "Adecuada")
        .with("adhd", "No")
        .with("intellectual_disability", "No")
        .with("sensory_hypersensitivity", "Ninguna")
        .with("sleep_disorders", "Normal")
        .with("selective_eating", "Ninguna")
        .with("family_history", "Ninguno")
}

/// Every item at its most severe answer.
pub fn severe() -> AnswerSet {
    AnswerSet::new(36.0)
        .with("sex", "Masculino")
        .with("language", "No verbal")
        .with("nonverbal_communication", "Ausente")
        .with("eye_contact", "Evitativo")
        .with("social_interaction", "Ausente")
        .with("response_to_name", "Nunca")
        .with("stereotypies", "Muy frecuentes")
        .with("restricted_interests", "Muy intensos")
        .with("emotional_regulation", "Autolesiva")
        .with("adhd", "Sí")
        .with("intellectual_disability", "Sí")
        .with("sensory_hypersensitivity", "Alta")
        .with("sleep_disorders", "Severo")
        .with("selective_eating", "Alta")
        .with("family_history", "TEA")
}
