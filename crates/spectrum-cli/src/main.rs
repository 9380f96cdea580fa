use clap::Parser;
use eyre::Result;

use spectrum_cli::cli::{Cli, Command};
use spectrum_cli::{commands, config};
use spectrum_features::encoder::UnknownValuePolicy;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };

    let explicit_config = cli.config.is_some();
    let load_config = || -> Result<config::SpectrumConfig> {
        let mut config = config::load_config(&config_path, explicit_config)?;
        if let Some(model) = &cli.model {
            config.model_path = model.clone();
        }
        if cli.strict {
            config.unknown_values = UnknownValuePolicy::Strict;
        }
        Ok(config)
    };

    let output = match &cli.command {
        Command::Questions => commands::questions(cli.json)?,
        Command::Diagnose { answers } => {
            let diagnoser = commands::load_diagnoser(&load_config()?)?;
            let answers = commands::read_answers(answers)?;
            commands::diagnose(&diagnoser, &answers, cli.json)?
        }
        Command::Sample => {
            let diagnoser = commands::load_diagnoser(&load_config()?)?;
            commands::sample(&diagnoser, cli.json)?
        }
        Command::Raw { values } => {
            let classifier = commands::load_classifier(&load_config()?)?;
            commands::raw(&classifier, values, cli.json)?
        }
        Command::Inspect => {
            let config = load_config()?;
            let classifier = commands::load_classifier(&config)?;
            commands::inspect(&classifier, &config, cli.json)?
        }
        Command::InitConfig { force } => commands::init_config(&config_path, *force)?,
    };

    println!("{output}");
    Ok(())
}
