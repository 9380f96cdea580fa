use spectrum_core::models::answers::AnswerSet;
use spectrum_features::encoder::{EncoderConfig, FeatureEncoder, UnknownValuePolicy};
use spectrum_features::error::EncodeError;
use spectrum_features::layout::{AGE_COLUMN, RISK_COLUMN, SegmentKind};
use spectrum_features::scaling::{ScalingConfig, Standardizer};
use spectrum_instruments::presets;

const WIDTH: usize = 55;

fn encoder() -> FeatureEncoder {
    FeatureEncoder::new(EncoderConfig::default(), WIDTH).unwrap()
}

fn strict_encoder() -> FeatureEncoder {
    let config = EncoderConfig {
        unknown_values: UnknownValuePolicy::Strict,
        ..EncoderConfig::default()
    };
    FeatureEncoder::new(config, WIDTH).unwrap()
}

fn segment_values<'a>(encoder: &FeatureEncoder, values: &'a [f32], name: &str) -> &'a [f32] {
    let segment = encoder.layout().segment(name).unwrap();
    &values[segment.offset..segment.offset + segment.width]
}

#[test]
fn layout_is_fifty_three_one_hot_plus_two_numeric() {
    let encoder = encoder();
    let layout = encoder.layout();
    assert_eq!(layout.width, WIDTH);
    assert_eq!(layout.segments.len(), 17);
    assert_eq!(layout.feature_names().len(), WIDTH);

    let age = layout.segment(AGE_COLUMN).unwrap();
    let risk = layout.segment(RISK_COLUMN).unwrap();
    assert_eq!(age.kind, SegmentKind::Numeric);
    assert_eq!(age.offset, 53);
    assert_eq!(risk.offset, 54);
    assert!(encoder.check_width().is_ok());
}

#[test]
fn valid_answer_sets_encode_to_declared_width() {
    let encoder = encoder();
    for answers in [presets::representative(), presets::typical(), presets::severe()] {
        assert_eq!(encoder.encode(&answers).unwrap().len(), WIDTH);
    }
}

#[test]
fn each_segment_is_one_hot() {
    let encoder = encoder();
    let vector = encoder.encode(&presets::representative()).unwrap();
    let values = vector.as_slice();
    for segment in &encoder.layout().segments {
        if segment.kind != SegmentKind::OneHot {
            continue;
        }
        let slice = &values[segment.offset..segment.offset + segment.width];
        let ones = slice.iter().filter(|v| **v == 1.0).count();
        let zeros = slice.iter().filter(|v| **v == 0.0).count();
        assert_eq!((ones, zeros), (1, segment.width - 1), "{}", segment.name);
    }
}

#[test]
fn slots_follow_training_category_order() {
    let encoder = encoder();
    let vector = encoder.encode(&presets::severe()).unwrap();
    // Ecolalia, Frases simples, Lenguaje funcional, No verbal
    assert_eq!(segment_values(&encoder, vector.as_slice(), "language"), &[0.0, 0.0, 0.0, 1.0]);
    // Femenino, Masculino
    assert_eq!(segment_values(&encoder, vector.as_slice(), "sex"), &[0.0, 1.0]);
    // No, Sí
    assert_eq!(segment_values(&encoder, vector.as_slice(), "adhd"), &[0.0, 1.0]);
}

#[test]
fn numeric_columns_are_standardized() {
    let encoder = encoder();
    let mut answers = presets::typical();
    answers.age_months = 19.0;
    let (vector, risk) = encoder.encode_scored(&answers).unwrap();
    assert_eq!(risk.value(), 0);

    let values = vector.as_slice();
    assert!(values[53].abs() < 1e-6);
    assert!((values[54] - (0.0 - 12.0) / 7.211).abs() < 1e-5);

    let (severe, risk) = encoder.encode_scored(&presets::severe()).unwrap();
    assert_eq!(risk.value(), 24);
    assert!((severe.as_slice()[54] - 12.0 / 7.211).abs() < 1e-5);
}

#[test]
fn encoding_is_repeatable() {
    let encoder = encoder();
    let answers = presets::representative();
    assert_eq!(encoder.encode(&answers).unwrap(), encoder.encode(&answers).unwrap());
}

#[test]
fn labels_encode_like_tokens() {
    let encoder = encoder();
    let by_token = AnswerSet::new(30.0).with("eye_contact", "Evitativo");
    let by_label = AnswerSet::new(30.0).with("eye_contact", "Avoidant");
    assert_eq!(encoder.encode(&by_token).unwrap(), encoder.encode(&by_label).unwrap());
}

#[test]
fn unknown_value_is_all_zero_segment_when_lenient() {
    let encoder = encoder();
    let mut answers = presets::representative();
    answers.set("eye_contact", "Sideways");
    let vector = encoder.encode(&answers).unwrap();
    assert_eq!(vector.len(), WIDTH);
    assert!(segment_values(&encoder, vector.as_slice(), "eye_contact").iter().all(|v| *v == 0.0));
}

#[test]
fn missing_answer_is_all_zero_segment_when_lenient() {
    let encoder = encoder();
    let mut answers = presets::representative();
    answers.answers.remove("family_history");
    let vector = encoder.encode(&answers).unwrap();
    assert!(segment_values(&encoder, vector.as_slice(), "family_history").iter().all(|v| *v == 0.0));
}

#[test]
fn missing_answer_fails_when_strict() {
    let encoder = strict_encoder();
    let mut answers = presets::representative();
    answers.answers.remove("family_history");
    assert!(matches!(
        encoder.encode(&answers),
        Err(EncodeError::MissingAnswer { ref question }) if question == "family_history"
    ));
}

#[test]
fn empty_answer_set_fails_when_strict() {
    let encoder = strict_encoder();
    assert!(matches!(
        encoder.encode(&AnswerSet::new(20.0)),
        Err(EncodeError::MissingAnswer { ref question }) if question == "sex"
    ));
}

#[test]
fn unknown_value_fails_when_strict() {
    let encoder = strict_encoder();
    let mut answers = presets::representative();
    answers.set("eye_contact", "Sideways");
    let err = encoder.encode(&answers).unwrap_err();
    assert!(matches!(
        err,
        EncodeError::UnrecognizedValue { ref question, ref value }
            if question == "eye_contact" && value == "Sideways"
    ));
}

#[test]
fn width_disagreement_is_dimension_mismatch() {
    let encoder = FeatureEncoder::new(EncoderConfig::default(), 54).unwrap();
    assert!(matches!(
        encoder.check_width(),
        Err(EncodeError::DimensionMismatch { expected: 54, actual: 55 })
    ));
    assert!(matches!(
        encoder.encode(&presets::typical()),
        Err(EncodeError::DimensionMismatch { expected: 54, actual: 55 })
    ));
}

#[test]
fn non_positive_std_is_rejected() {
    let config = EncoderConfig {
        scaling: ScalingConfig {
            risk_score: Standardizer { mean: 12.0, std: 0.0 },
            ..ScalingConfig::default()
        },
        ..EncoderConfig::default()
    };
    assert!(matches!(
        FeatureEncoder::new(config, WIDTH),
        Err(EncodeError::InvalidScaling(_))
    ));
}
