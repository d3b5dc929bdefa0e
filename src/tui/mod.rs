//! Terminal UI for noughts.
//!
//! Single-threaded and event driven: each key press is handled to
//! completion before the next one is read.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the TUI until the player quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all)]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting noughts TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| run_app(&mut terminal, App::new(config)));

    restore_terminal()?;

    if let Err(err) = &result {
        error!(error = ?err, "TUI loop error");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Resize and other events just fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == AppAction::Quit {
                info!(scores = %app.session().scores(), "User quit");
                return Ok(());
            }
        }
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, Show).context("Failed to leave alternate screen")?;
    Ok(())
}
