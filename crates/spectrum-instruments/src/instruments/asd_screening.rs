use crate::Instrument;
use crate::scoring::{AnswerOption, Question, ValueRange};

/// Early-childhood ASD screening questionnaire: 15 categorical items plus
/// age in months (3–36). The item order and category tokens are those the
/// bundled classifier was trained on.
pub struct AsdScreening;

pub const ID: &str = "asd_screening";

impl Instrument for AsdScreening {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "ASD Screening"
    }

    fn age_range(&self) -> ValueRange {
        ValueRange {
            min: 3.0,
            max: 36.0,
        }
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                question("sex", "Sex", "Sexo", &[
                    ("Masculino", "Male"),
                    ("Femenino", "Female"),
                ]),
                question("language", "Language", "Lenguaje", &[
                    ("No verbal", "Non-verbal"),
                    ("Ecolalia", "Echolalia"),
                    ("Frases simples", "Simple phrases"),
                    ("Lenguaje funcional", "Functional language"),
                ]),
                question("nonverbal_communication", "Non-verbal communication", "Comunicación no verbal", &[
                    ("Ausente", "Absent"),
                    ("Muy limitada", "Very limited"),
                    ("Limitada", "Limited"),
                    ("Adecuada", "Adequate"),
                ]),
                question("eye_contact", "Eye contact", "Contacto visual", &[
                    ("Evitativo", "Avoidant"),
                    ("Intermitente", "Intermittent"),
                    ("Sostenido", "Sustained"),
                    ("Natural", "Natural"),
                ]),
                question("social_interaction", "Social interaction", "Interacción social", &[
                    ("Ausente", "Absent"),
                    ("Pasiva", "Passive"),
                    ("Inapropiada", "Inappropriate"),
                    ("Adecuada", "Adequate"),
                ]),
                question("response_to_name", "Response to name", "Respuesta al nombre", &[
                    ("Nunca", "Never"),
                    ("A veces", "Sometimes"),
                    ("Siempre", "Always"),
                ]),
                question("stereotypies", "Stereotypies", "Estereotipias", &[
                    ("Muy frecuentes", "Very frequent"),
                    ("Frecuentes", "Frequent"),
                    ("Ocasionales", "Occasional"),
                    ("Ausentes", "Absent"),
                ]),
                question("restricted_interests", "Restricted interests", "Intereses restringidos", &[
                    ("Muy intensos", "Very intense"),
                    ("Persistentes", "Persistent"),
                    ("Leves", "Mild"),
                    ("Ausentes", "Absent"),
                ]),
                question("emotional_regulation", "Emotional regulation", "Regulación emocional", &[
                    ("Autolesiva", "Self-injurious"),
                    ("Crisis frecuentes", "Frequent meltdowns"),
                    ("Ocasionales", "Occasional"),
                    ("Adecuada", "Adequate"),
                ]),
                question("adhd", "ADHD", "TDAH", &[
                    ("Sí", "Yes"),
                    ("No", "No"),
                ]),
                question("intellectual_disability", "Intellectual disability", "Discapacidad intelectual", &[
                    ("Sí", "Yes"),
                    ("No", "No"),
                ]),
                question("sensory_hypersensitivity", "Sensory hypersensitivity", "Hipersensibilidad sensorial", &[
                    ("Alta", "High"),
                    ("Moderada", "Moderate"),
                    ("Leve", "Mild"),
                    ("Ninguna", "None"),
                ]),
                question("sleep_disorders", "Sleep disorders", "Trastornos del sueño", &[
                    ("Severo", "Severe"),
                    ("Moderado", "Moderate"),
                    ("Leve", "Mild"),
                    ("Normal", "Normal"),
                ]),
                question("selective_eating", "Selective eating", "Alimentación selectiva", &[
                    ("Alta", "High"),
                    ("Moderada", "Moderate"),
                    ("Leve", "Mild"),
                    ("Ninguna", "None"),
                ]),
                question("family_history", "Family history", "Antecedentes familiares", &[
                    ("TEA", "ASD"),
                    ("TDAH", "ADHD"),
                    ("Discapacidad intelectual", "Intellectual disability"),
                    ("Ninguno", "None"),
                ]),
            ]
        });
        &QUESTIONS
    }
}

fn question(id: &str, name: &str, training_column: &str, options: &[(&str, &str)]) -> Question {
    Question {
        id: id.to_string(),
        name: name.to_string(),
        training_column: training_column.to_string(),
        options: options
            .iter()
            .map(|(value, label)| AnswerOption {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
    }
}
