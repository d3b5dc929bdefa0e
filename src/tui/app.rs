//! Application state: one game session plus a board cursor.

use crate::config::AppConfig;
use crossterm::event::KeyCode;
use noughts_core::{GameSession, Position, Snapshot};
use tracing::{debug, info, instrument};

use super::input::{digit_cell, move_cursor};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    show_cell_numbers: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            show_cell_numbers: *config.show_cell_numbers(),
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their 1-9 hint.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Projection of the session for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Translates a key press into session calls.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') => {
                info!("Resetting round");
                self.session.reset();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(self.cursor.to_index()),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(index) = digit_cell(other) {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.submit(index);
                }
            }
        }
        AppAction::Continue
    }

    fn submit(&mut self, index: usize) {
        match self.session.submit_move(index) {
            Ok(action) => debug!(%action, status = %self.session.status(), "Move played"),
            // Rejected moves are silent in the UI.
            Err(rejection) => debug!(%rejection, "Move ignored"),
        }
    }
}
