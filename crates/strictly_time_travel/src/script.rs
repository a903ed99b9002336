//! Replay scripts: a list of intents applied to a fresh game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::{GameState, Intent, Rejection};
use tracing::{debug, info, instrument, warn};

/// Intents in the order a player issued them.
///
/// ```json
/// {"intents": [{"action": "play", "cell": 4}, {"action": "jump_to", "step": 0}]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Intents to apply.
    pub intents: Vec<Intent>,
}

/// An intent from a script that had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoredIntent {
    /// Position of the intent in the script.
    pub index: usize,
    /// The intent itself.
    pub intent: Intent,
    /// Why it was ignored.
    pub reason: Rejection,
}

/// Result of running a script.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Game after the last intent.
    pub game: GameState,
    /// Intents that changed nothing.
    pub ignored: Vec<IgnoredIntent>,
}

impl Script {
    /// Loads a script from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading script");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script: {}", e)))?;
        Self::from_json(&content)
    }

    /// Parses a script from JSON text.
    pub fn from_json(content: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))
    }

    /// Applies every intent to a new game.
    #[instrument(skip(self), fields(intents = self.intents.len()))]
    pub fn run(&self) -> Replay {
        let mut game = GameState::new();
        let mut ignored = Vec::new();

        for (index, intent) in self.intents.iter().copied().enumerate() {
            if let Some(reason) = game.apply(intent).rejection() {
                warn!(index, %intent, %reason, "Intent ignored");
                ignored.push(IgnoredIntent {
                    index,
                    intent,
                    reason,
                });
            }
        }

        info!(
            steps = game.history().len(),
            ignored = ignored.len(),
            "Replay finished"
        );
        Replay { game, ignored }
    }
}

impl Replay {
    /// Renders the status, the displayed board and the move list as text.
    pub fn render(&self, show_locations: bool) -> String {
        let mut out = format!(
            "{}\n\n{}\n\n",
            self.game.status(),
            self.game.current_board().display()
        );

        for entry in self.game.move_list() {
            let marker = if entry.current { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}", marker, entry.step, entry.label));
            if show_locations && let Some((player, pos)) = entry.played {
                let (col, row) = pos.location();
                out.push_str(&format!(" ({} at {}, {})", player, col, row));
            }
            out.push('\n');
        }

        for skipped in &self.ignored {
            out.push_str(&format!(
                "ignored #{} ({}): {}\n",
                skipped.index, skipped.intent, skipped.reason
            ));
        }
        out
    }
}

/// Script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
