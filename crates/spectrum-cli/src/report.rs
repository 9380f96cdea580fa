//! Plain-text rendering of command results.

use serde::Serialize;
use spectrum_core::models::prediction::PredictionResult;
use spectrum_instruments::Instrument;
use spectrum_model::diagnose::Diagnosis;

pub const DISCLAIMER: &str = "IMPORTANT: this is a decision-support tool. Its output does not replace \
a professional clinical evaluation. Always consult a child neurology or psychiatry specialist.";

/// Model shape check, as printed by `spectrum inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub model_path: String,
    pub model_layers: usize,
    pub model_input_width: usize,
    pub model_output_width: usize,
    pub layout_width: usize,
    pub widths_match: bool,
    pub features: Vec<String>,
}

pub fn render_questions(instrument: &dyn Instrument) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", instrument.name(), instrument.id()));
    let range = instrument.age_range();
    out.push_str(&format!("\nage_months: number, {}–{}\n", range.min, range.max));
    for question in instrument.questions() {
        out.push_str(&format!("\n{}: {}\n", question.id, question.name));
        for option in &question.options {
            out.push_str(&format!("  - {} ({})\n", option.value, option.label));
        }
    }
    out
}

pub fn render_prediction(prediction: &PredictionResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Diagnosis:  {}\n", prediction.label));
    out.push_str(&format!("Confidence: {:.1}%\n", prediction.confidence * 100.0));
    out.push_str("\nProbability distribution:\n");
    for (label, p) in prediction.probabilities() {
        let marker = if label == prediction.label { "*" } else { " " };
        out.push_str(&format!(" {marker} {:<20} {:>5.1}%\n", label.name(), p * 100.0));
    }
    out
}

pub fn render_diagnosis(diagnosis: &Diagnosis) -> String {
    let mut out = render_prediction(&diagnosis.prediction);
    out.push_str(&format!(
        "\nRisk score: {} ({})\n",
        diagnosis.risk_score, diagnosis.risk_band
    ));
    out.push_str(&format!("\n{DISCLAIMER}\n"));
    out
}

pub fn render_inspection(inspection: &Inspection) -> String {
    let mut out = String::new();
    out.push_str(&format!("Model:               {}\n", inspection.model_path));
    out.push_str(&format!("Layers:              {}\n", inspection.model_layers));
    out.push_str(&format!("Declared input:      {}\n", inspection.model_input_width));
    out.push_str(&format!("Declared output:     {}\n", inspection.model_output_width));
    out.push_str(&format!("Questionnaire width: {}\n", inspection.layout_width));
    if inspection.widths_match {
        out.push_str("\nWidths match.\n");
    } else {
        out.push_str(&format!(
            "\nWidths DO NOT match (difference {}).\n",
            inspection.model_input_width as i64 - inspection.layout_width as i64
        ));
    }
    out.push_str("\nFeatures:\n");
    for (i, name) in inspection.features.iter().enumerate() {
        out.push_str(&format!("  {i:>3}  {name}\n"));
    }
    out
}
