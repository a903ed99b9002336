//! Terminal UI for time-travel tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::{App, Control, Focus};
pub use input::{digit_cell, move_cursor, move_selection};
pub use ui::draw;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Runs the TUI until the player quits.
pub fn run(config: &AppConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting time travel TUI");

    enable_raw_mode()?;
    let res = restoring(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
            let app = App::new(*config.show_locations());
            run_app(&mut terminal, app, config.tick())
        },
        restore_terminal,
    );

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");

    res
}

/// Leaves raw mode and the alternate screen and shows the cursor.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

/// Runs `body`, then `restore` whether or not `body` failed.
///
/// An error from `body` is returned in preference to one from `restore`.
fn restoring<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();
    if let (Err(_), Err(restore_err)) = (&res, &restored) {
        error!(error = ?restore_err, "Failed to restore terminal");
    }
    let value = res?;
    restored?;
    Ok(value)
}

#[instrument(skip_all, fields(tick_ms = tick.as_millis() as u64))]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            info!(steps = app.game().history().len(), "User quit");
            return Ok(());
        }
    }
}
