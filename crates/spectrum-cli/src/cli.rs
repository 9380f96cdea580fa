use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    name = "spectrum",
    version,
    about = "Early-childhood ASD screening: questionnaire answers in, model-assisted label out."
)]
pub struct Cli {
    /// Config file. Defaults to `<config dir>/spectrum/config.json`.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Model artifact (safetensors). Overrides the config file.
    #[clap(long, global = true)]
    pub model: Option<PathBuf>,

    /// Reject answers outside the questionnaire instead of ignoring them.
    #[clap(long, global = true)]
    pub strict: bool,

    /// Print machine-readable JSON instead of a report.
    #[clap(long, global = true)]
    pub json: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the questionnaire items and their allowed answers.
    Questions,

    /// Run the full pipeline on an answers file.
    Diagnose {
        /// JSON file: `{"age_months": 30, "answers": {"language": "Ecolalia", ...}}`.
        answers: PathBuf,
    },

    /// Run the full pipeline on a built-in representative answer set.
    Sample,

    /// Predict directly from feature values in [0, 1]. Missing values are
    /// filled with 0.5; extra values are dropped.
    Raw {
        #[clap(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<f32>,
    },

    /// Compare the model's declared shapes with the questionnaire layout.
    Inspect,

    /// Write a config file with default settings.
    InitConfig {
        /// Overwrite an existing file.
        #[clap(long)]
        force: bool,
    },
}
