//! Command-line interface for strictly_time_travel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Time Travel - tic-tac-toe with a jumpable move history
#[derive(Parser, Debug)]
#[command(name = "strictly_time_travel")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a JSON script of intents and print the result
    Replay {
        /// Path to the script file
        script: PathBuf,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}
