//! Replay a scripted pointer-event sequence through the polygon annotator
//! and print the resulting shapes as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use polyedit::replay::{self, ReplayScript};
use polyedit::{AnnotatorConfig, ConfigError};

#[derive(Parser, Debug)]
#[command(
    name = "polyedit-replay",
    about = "Replay pointer events through the polygon annotator"
)]
struct Cli {
    /// Replay script (JSON)
    script: PathBuf,

    /// Configuration file; defaults to the per-user config if present
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(AnnotatorConfig::default_path);
    let loaded = match &config_path {
        Some(path) => AnnotatorConfig::load_if_exists(path),
        None => Ok(None),
    };

    // An explicitly requested config must load
    if let Some(path) = &cli.config {
        match &loaded {
            Ok(Some(_)) => {}
            Ok(None) => {
                eprintln!("Config file {:?} not found", path);
                return ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("Failed to load config {:?}: {}", path, e);
                return ExitCode::FAILURE;
            }
        }
    }

    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AnnotatorConfig::default(),
    };

    // RUST_LOG still wins over the configured level
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    log_config_source(config_path.as_ref(), &loaded);

    let outcome = ReplayScript::load(&cli.script)
        .and_then(|script| replay::run(&script, config.drawing));

    match outcome {
        Ok(outcome) => match serde_json::to_string_pretty(&outcome) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Replay error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn log_config_source(
    path: Option<&PathBuf>,
    loaded: &Result<Option<AnnotatorConfig>, ConfigError>,
) {
    match (path, loaded) {
        (Some(path), Ok(Some(_))) => log::info!("Loaded configuration from {:?}", path),
        (Some(path), Ok(None)) => log::debug!("No config file found at {:?}", path),
        (Some(path), Err(e)) => log::warn!("Failed to load config file {:?}: {}", path, e),
        (None, _) => log::debug!("No config directory, using defaults"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_script_and_config() {
        let cli = Cli::try_parse_from(["polyedit-replay", "s.json", "--config", "c.json"]).unwrap();
        assert_eq!(cli.script, PathBuf::from("s.json"));
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        // Misspelled flag
        assert!(Cli::try_parse_from(["polyedit-replay", "--confg", "c.json", "s.json"]).is_err());
        // Flag without a value
        assert!(Cli::try_parse_from(["polyedit-replay", "s.json", "--config"]).is_err());
        // Two scripts
        assert!(Cli::try_parse_from(["polyedit-replay", "a.json", "b.json"]).is_err());
        // No script
        assert!(Cli::try_parse_from(["polyedit-replay"]).is_err());
    }
}
