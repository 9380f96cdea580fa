//! One function per subcommand. Each returns the text to print.

use std::path::Path;

use eyre::WrapErr;
use serde::Serialize;
use spectrum_core::models::answers::AnswerSet;
use spectrum_core::models::features::FeatureVector;
use spectrum_features::encoder::{FeatureEncoder, UnknownValuePolicy};
use spectrum_instruments::instruments::asd_screening;
use spectrum_instruments::{Instrument, presets, require_instrument};
use spectrum_model::classifier::Classifier;
use spectrum_model::diagnose::Diagnoser;

use crate::config::{self, SpectrumConfig};
use crate::report::{self, Inspection};

/// Value used for features the user did not supply in `raw` mode.
pub const SLIDER_FILL: f32 = 0.5;

fn emit<T: Serialize>(value: &T, json: bool, text: impl FnOnce(&T) -> String) -> eyre::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text(value))
    }
}

pub fn load_classifier(config: &SpectrumConfig) -> eyre::Result<Classifier> {
    Classifier::load(&config.model_path).wrap_err("the screening model could not be loaded")
}

pub fn load_diagnoser(config: &SpectrumConfig) -> eyre::Result<Diagnoser> {
    let classifier = load_classifier(config)?;
    Ok(Diagnoser::new(classifier, config.encoder_config())?)
}

pub fn read_answers(path: &Path) -> eyre::Result<AnswerSet> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
    AnswerSet::from_json(&contents)
        .wrap_err_with(|| format!("{} is not a valid answers file", path.display()))
}

pub fn questions(json: bool) -> eyre::Result<String> {
    let instrument = require_instrument(asd_screening::ID)?;
    if json {
        return Ok(serde_json::to_string_pretty(instrument.questions())?);
    }
    Ok(report::render_questions(instrument.as_ref()))
}

pub fn diagnose(diagnoser: &Diagnoser, answers: &AnswerSet, json: bool) -> eyre::Result<String> {
    let instrument = require_instrument(asd_screening::ID)?;
    match diagnoser.encoder().config().unknown_values {
        UnknownValuePolicy::Strict => instrument.check_answers(answers)?,
        UnknownValuePolicy::Lenient => {
            for problem in instrument.validate_answers(answers) {
                tracing::warn!(field = %problem.field, "{}", problem.message);
            }
        }
    }

    let diagnosis = diagnoser.diagnose(answers)?;
    emit(&diagnosis, json, report::render_diagnosis)
}

pub fn sample(diagnoser: &Diagnoser, json: bool) -> eyre::Result<String> {
    let answers = presets::representative();
    let diagnosis = diagnoser.diagnose(&answers)?;
    if json {
        return emit(&diagnosis, json, report::render_diagnosis);
    }

    let instrument = require_instrument(asd_screening::ID)?;
    Ok(format!(
        "{}\n{}",
        instrument.to_structured_input(&answers),
        report::render_diagnosis(&diagnosis)
    ))
}

pub fn raw(classifier: &Classifier, values: &[f32], json: bool) -> eyre::Result<String> {
    if let Some((i, v)) = values
        .iter()
        .enumerate()
        .find(|(_, v)| !(0.0..=1.0).contains(*v))
    {
        return Err(eyre::eyre!("value #{} ({v}) is outside [0, 1]", i + 1));
    }
    if values.len() > classifier.input_width() {
        tracing::warn!(
            given = values.len(),
            width = classifier.input_width(),
            "dropping values beyond the model's input width"
        );
    }

    let vector = FeatureVector::fitted(values, classifier.input_width(), SLIDER_FILL);
    let prediction = classifier.predict(&vector)?;
    emit(&prediction, json, report::render_prediction)
}

pub fn inspect(classifier: &Classifier, config: &SpectrumConfig, json: bool) -> eyre::Result<String> {
    let encoder = FeatureEncoder::new(config.encoder_config(), classifier.input_width())?;
    let layout = encoder.layout();
    let inspection = Inspection {
        model_path: classifier.path().display().to_string(),
        model_layers: classifier.depth(),
        model_input_width: classifier.input_width(),
        model_output_width: classifier.output_width(),
        layout_width: layout.width,
        widths_match: encoder.check_width().is_ok(),
        features: layout.feature_names(),
    };
    emit(&inspection, json, report::render_inspection)
}

pub fn init_config(path: &Path, force: bool) -> eyre::Result<String> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    config::save_config(&SpectrumConfig::default(), path)?;
    Ok(format!("wrote {}", path.display()))
}
