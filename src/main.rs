use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use shapekit::init_logging;
use shapekit::script::{replay, GestureScript};
use shapekit_settings::{Config, SettingsError, SettingsPersistence};

#[derive(Debug, Parser)]
#[command(name = "shapekit", version, about = "Replay pointer gestures against the shape transform engine")]
struct Args {
    /// Config file (.json or .toml). Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Run a gesture script and print the final geometries as JSON
    Replay {
        script: PathBuf,
    },

    /// Run a gesture script and print the handles of the selected shape
    Handles {
        script: PathBuf,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match SettingsPersistence::load_default() {
            Ok(settings) => Ok(settings.into_config()),
            // No config directory on this platform: run with defaults.
            Err(SettingsError::ConfigDirectory(_)) => Ok(Config::default()),
            Err(e) => Err(e).context("Failed to load default config"),
        },
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    init_logging(&config.logging.level)?;

    match args.cmd {
        Cmd::Replay { script } => {
            let script = GestureScript::load(&script)?;
            let outcome = replay(&script, config.interaction, config.history.max_entries);
            tracing::info!("Replayed {} events", outcome.events.len());
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Cmd::Handles { script } => {
            let script = GestureScript::load(&script)?;
            let outcome = replay(&script, config.interaction, config.history.max_entries);
            if outcome.selected.is_none() {
                tracing::warn!("No shape is selected at the end of the script");
            }
            println!("{}", serde_json::to_string_pretty(&outcome.handles)?);
        }
    }

    Ok(())
}
