//! Cumulative score keeping across rounds.

use super::Outcome;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Score totals: wins for each player and drawn rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Drawn rounds.
    draw: u32,
}

impl Scores {
    /// Creates totals from raw counters.
    pub fn new(x: u32, o: u32, draw: u32) -> Self {
        Self { x, o, draw }
    }

    /// Rounds won by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Rounds won by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Drawn rounds.
    pub fn draw(&self) -> u32 {
        self.draw
    }

    /// Total number of finished rounds.
    pub fn rounds(&self) -> u32 {
        self.x + self.o + self.draw
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}  Draws: {}", self.x, self.o, self.draw)
    }
}

/// Score ledger owned by a game session.
///
/// Counters only ever go up and live as long as the owning session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    totals: Scores,
}

impl ScoreLedger {
    /// Creates a ledger with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished round.
    ///
    /// Must be called once per round, on the move that ended it. Calling it
    /// for a round still in progress is a caller bug.
    #[instrument(skip_all, fields(outcome = %outcome))]
    pub fn record_result(&mut self, outcome: &Outcome) {
        debug_assert!(outcome.is_over(), "record_result called for a live round");
        match outcome {
            Outcome::Decisive { winner, .. } => match winner {
                crate::Player::X => self.totals.x += 1,
                crate::Player::O => self.totals.o += 1,
            },
            Outcome::Draw => self.totals.draw += 1,
            Outcome::InProgress => {
                warn!("Ignoring result for a round still in progress");
                return;
            }
        }
        debug!(totals = %self.totals, "Recorded result");
    }

    /// Returns the current totals.
    pub fn totals(&self) -> Scores {
        self.totals
    }
}
