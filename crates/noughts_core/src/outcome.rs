//! Round outcome derived from a board.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Classification of the current round.
///
/// Always derived from the board by [`crate::rules::evaluate`]; never
/// edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty square.
    InProgress,
    /// A player completed a line.
    Decisive {
        /// The player who owns the line.
        winner: Player,
        /// The three positions of the completed line.
        line: [Position; 3],
    },
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true once the round has ended (win or draw).
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Decisive { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line, empty unless the round was won.
    pub fn winning_line(&self) -> &[Position] {
        match self {
            Outcome::Decisive { line, .. } => line,
            _ => &[],
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Decisive { winner, .. } => write!(f, "Player {} wins", winner),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
