use serde::Serialize;
use spectrum_core::models::answers::AnswerSet;
use spectrum_core::models::prediction::PredictionResult;
use spectrum_features::encoder::{EncoderConfig, FeatureEncoder};
use spectrum_instruments::risk::{RiskBand, RiskScore};

use crate::classifier::Classifier;
use crate::error::DiagnoseError;

/// Model prediction plus the risk score that was fed into it.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    pub prediction: PredictionResult,
    pub risk_score: RiskScore,
    /// Display band for `risk_score`. Independent of `prediction.label`.
    pub risk_band: RiskBand,
}

/// Answer set in, diagnosis out.
///
/// Owns the classifier; build one at startup and pass it by reference.
#[derive(Debug)]
pub struct Diagnoser {
    classifier: Classifier,
    encoder: FeatureEncoder,
}

impl Diagnoser {
    /// Fails with a dimension mismatch if the questionnaire cannot fill the
    /// classifier's input.
    pub fn new(classifier: Classifier, config: EncoderConfig) -> Result<Self, DiagnoseError> {
        let encoder = FeatureEncoder::new(config, classifier.input_width())?;
        encoder.check_width()?;
        Ok(Self {
            classifier,
            encoder,
        })
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    pub fn diagnose(&self, answers: &AnswerSet) -> Result<Diagnosis, DiagnoseError> {
        let (vector, risk_score) = self.encoder.encode_scored(answers)?;
        let prediction = self.classifier.predict(&vector)?;
        Ok(Diagnosis {
            prediction,
            risk_score,
            risk_band: risk_score.band(),
        })
    }
}
