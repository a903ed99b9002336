//! Strictly time travel - terminal front end for tic-tac-toe with history
//!
//! Renders a [`strictly_tictactoe::GameState`] and forwards the player's
//! intents into it.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for logging, polling and display
//! - **Script**: replay a JSON list of intents without a terminal
//! - **TUI**: ratatui board, move list and status line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod script;
pub mod tui;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use script::{IgnoredIntent, Replay, Script, ScriptError};
