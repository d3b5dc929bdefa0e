//! Status line projection.

use super::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How insistently a status change should be announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Routine update (turn changes).
    #[display("polite")]
    Polite,
    /// The round just ended.
    #[display("assertive")]
    Assertive,
}

/// Human-readable status plus its urgency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Status {
    text: String,
    urgency: Urgency,
}

impl Status {
    /// Status text, e.g. `"Turn: Player X"`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Announcement urgency.
    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// True when the projected status ends the round.
    pub fn is_round_over(&self) -> bool {
        self.urgency == Urgency::Assertive
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Derives the status for `outcome` with `mover` to play.
#[instrument]
pub fn project(outcome: &Outcome, mover: Player) -> Status {
    match outcome {
        Outcome::Decisive { winner, .. } => Status {
            text: format!("Player {} wins!", winner),
            urgency: Urgency::Assertive,
        },
        Outcome::Draw => Status {
            text: "Draw! Nobody wins.".to_string(),
            urgency: Urgency::Assertive,
        },
        Outcome::InProgress => Status {
            text: format!("Turn: Player {}", mover),
            urgency: Urgency::Polite,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_in_progress_names_mover() {
        let status = project(&Outcome::InProgress, Player::O);
        assert_eq!(status.text(), "Turn: Player O");
        assert_eq!(status.urgency(), Urgency::Polite);
        assert!(!status.is_round_over());
    }

    #[test]
    fn test_win_names_winner_not_mover() {
        let outcome = Outcome::Decisive {
            winner: Player::X,
            line: [Position::TopLeft, Position::Center, Position::BottomRight],
        };
        let status = project(&outcome, Player::O);
        assert_eq!(status.text(), "Player X wins!");
        assert_eq!(status.urgency(), Urgency::Assertive);
        assert!(status.is_round_over());
    }

    #[test]
    fn test_draw() {
        let status = project(&Outcome::Draw, Player::O);
        assert_eq!(status.text(), "Draw! Nobody wins.");
        assert!(status.is_round_over());
    }
}
