use spectrum_core::models::answers::AnswerSet;
use spectrum_core::models::features::FeatureVector;
use spectrum_core::models::label::DiagnosticLabel;

#[test]
fn label_order_matches_model_output() {
    let names: Vec<_> = DiagnosticLabel::ALL.iter().map(|l| l.name()).collect();
    assert_eq!(
        names,
        [
            "Typical development",
            "ASD - Level 1",
            "ASD - Level 2",
            "ASD - Level 3",
            "Indeterminate",
        ]
    );
    for (i, label) in DiagnosticLabel::ALL.iter().enumerate() {
        assert_eq!(label.index(), i);
        assert_eq!(DiagnosticLabel::from_index(i), Some(*label));
    }
    assert_eq!(DiagnosticLabel::from_index(5), None);
}

#[test]
fn asd_levels() {
    assert_eq!(DiagnosticLabel::TypicalDevelopment.asd_level(), None);
    assert_eq!(DiagnosticLabel::AsdLevel3.asd_level(), Some(3));
    assert_eq!(DiagnosticLabel::Indeterminate.asd_level(), None);
}

#[test]
fn label_serializes_as_snake_case() {
    let json = serde_json::to_string(&DiagnosticLabel::AsdLevel1).unwrap();
    assert_eq!(json, "\"asd_level1\"");
}

#[test]
fn answer_set_parses_from_json() {
    let json = r#"{
        "age_months": 30,
        "answers": { "language": "Frases simples", "eye_contact": "Intermittent" }
    }"#;
    let answers = AnswerSet::from_json(json).unwrap();
    assert_eq!(answers.age_months, 30.0);
    assert_eq!(answers.get("language"), Some("Frases simples"));
    assert_eq!(answers.get("eye_contact"), Some("Intermittent"));
    assert_eq!(answers.get("sex"), None);
}

#[test]
fn answer_set_without_answers_defaults_to_empty() {
    let answers = AnswerSet::from_json(r#"{ "age_months": 12 }"#).unwrap();
    assert!(answers.answers.is_empty());
}

#[test]
fn fitted_vector_pads_and_truncates() {
    let padded = FeatureVector::fitted(&[0.1, 0.2], 4, 0.5);
    assert_eq!(padded.as_slice(), &[0.1, 0.2, 0.5, 0.5]);

    let truncated = FeatureVector::fitted(&[0.1, 0.2, 0.3], 2, 0.5);
    assert_eq!(truncated.as_slice(), &[0.1, 0.2]);
}
