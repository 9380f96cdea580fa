use spectrum_core::models::answers::AnswerSet;
use spectrum_instruments::error::InstrumentError;
use spectrum_instruments::instruments::asd_screening::{self, AsdScreening};
use spectrum_instruments::scoring::ValidationKind;
use spectrum_instruments::{Instrument, get_instrument, presets, require_instrument};

#[test]
fn questionnaire_has_fifteen_questions_in_training_order() {
    let ids: Vec<_> = AsdScreening.questions().iter().map(|q| q.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "sex",
            "language",
            "nonverbal_communication",
            "eye_contact",
            "social_interaction",
            "response_to_name",
            "stereotypies",
            "restricted_interests",
            "emotional_regulation",
            "adhd",
            "intellectual_disability",
            "sensory_hypersensitivity",
            "sleep_disorders",
            "selective_eating",
            "family_history",
        ]
    );
}

#[test]
fn one_hot_width_is_fifty_three() {
    let width: usize = AsdScreening.questions().iter().map(|q| q.options.len()).sum();
    assert_eq!(width, 53);
}

#[test]
fn encoding_order_is_lexicographic_on_training_tokens() {
    let language = AsdScreening.question("language").unwrap();
    let order: Vec<_> = language.encoding_order().iter().map(|o| o.value.as_str()).collect();
    assert_eq!(order, ["Ecolalia", "Frases simples", "Lenguaje funcional", "No verbal"]);

    let adhd = AsdScreening.question("adhd").unwrap();
    assert_eq!(adhd.encoding_slot("No"), Some(0));
    assert_eq!(adhd.encoding_slot("Sí"), Some(1));
    assert_eq!(adhd.encoding_slot("Yes"), Some(1));
    assert_eq!(adhd.encoding_slot("Maybe"), None);
}

#[test]
fn options_resolve_by_token_or_label() {
    let eye = AsdScreening.question("eye_contact").unwrap();
    assert_eq!(eye.option("Avoidant").unwrap().value, "Evitativo");
    assert_eq!(eye.option("Evitativo").unwrap().label, "Avoidant");
    assert!(eye.option("avoidant").is_none());
}

#[test]
fn presets_validate_cleanly() {
    for answers in [presets::representative(), presets::typical(), presets::severe()] {
        assert!(AsdScreening.validate_answers(&answers).is_empty());
        assert!(AsdScreening.check_answers(&answers).is_ok());
    }
}

#[test]
fn validation_reports_every_problem() {
    let mut answers = presets::representative();
    answers.age_months = 48.0;
    answers.set("language", "Klingon");
    answers.set("favourite_colour", "Blue");
    answers.answers.remove("sex");

    let errors = AsdScreening.validate_answers(&answers);
    let kinds: Vec<_> = errors.iter().map(|e| (e.field.as_str(), e.kind)).collect();
    assert!(kinds.contains(&("age_months", ValidationKind::AgeOutOfRange)));
    assert!(kinds.contains(&("language", ValidationKind::UnrecognizedValue)));
    assert!(kinds.contains(&("favourite_colour", ValidationKind::UnknownQuestion)));
    assert!(kinds.contains(&("sex", ValidationKind::MissingAnswer)));
    assert_eq!(errors.len(), 4);
}

#[test]
fn check_answers_fails_on_first_problem() {
    let answers = AnswerSet::new(2.0);
    let err = AsdScreening.check_answers(&answers).unwrap_err();
    assert!(matches!(err, InstrumentError::Validation(ref e) if e.kind == ValidationKind::AgeOutOfRange));
}

#[test]
fn nan_age_is_out_of_range() {
    let mut answers = presets::typical();
    answers.age_months = f32::NAN;
    let errors = AsdScreening.validate_answers(&answers);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationKind::AgeOutOfRange);
}

#[test]
fn registry_lookup() {
    assert!(get_instrument(asd_screening::ID).is_some());
    assert!(get_instrument("cars2").is_none());
    assert!(matches!(
        require_instrument("cars2"),
        Err(InstrumentError::UnknownInstrument(id)) if id == "cars2"
    ));
}

#[test]
fn structured_input_uses_display_labels() {
    let mut answers = presets::severe();
    answers.set("sleep_disorders", "Terrible");
    let text = AsdScreening.to_structured_input(&answers);
    assert!(text.starts_with("## ASD Screening"));
    assert!(text.contains("- Language: Non-verbal"));
    assert!(text.contains("- Sleep disorders: Terrible (unrecognized)"));
    assert!(text.contains("- Age (months): 36"));
}
