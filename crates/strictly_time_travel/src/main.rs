//! Strictly Time Travel - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use strictly_time_travel::{AppConfig, Script, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = AppConfig::load(config.as_deref())?;
            tui::run(&config)
        }
        Command::Replay {
            script,
            config,
            json,
        } => run_replay(script, config.as_deref(), json),
    }
}

/// Replays a script and prints the final game.
#[instrument(skip_all, fields(script = %script.display()))]
fn run_replay(script: PathBuf, config: Option<&Path>, json: bool) -> Result<()> {
    let config = AppConfig::load(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Replaying script");

    let script = Script::from_file(&script)
        .with_context(|| format!("Failed to load script {}", script.display()))?;
    let replay = script.run();

    if json {
        println!("{}", serde_json::to_string_pretty(&replay.game)?);
    } else {
        print!("{}", replay.render(*config.show_locations()));
    }

    Ok(())
}
