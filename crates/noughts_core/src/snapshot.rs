//! Immutable view of a session, consumed by renderers.

use super::ledger::Scores;
use super::session::GameSession;
use super::status::Urgency;
use super::{Outcome, Player, Position, Square};
use derive_getters::Getters;
use serde::Serialize;

/// Everything a renderer needs, copied out of a [`GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Snapshot {
    /// Squares in row-major order.
    grid: [Square; 9],
    /// Player to move next.
    mover: Player,
    /// Current outcome.
    outcome: Outcome,
    /// Winning positions; empty unless the round was won.
    winning_line: Vec<Position>,
    /// Score totals.
    scores: Scores,
    /// Status text.
    status_text: String,
    /// How the status should be announced.
    urgency: Urgency,
}

impl Snapshot {
    /// Returns true if `pos` belongs to the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line.contains(&pos)
    }

    /// Returns the square at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.grid[pos.to_index()]
    }
}

impl From<&GameSession> for Snapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            grid: *session.board().squares(),
            mover: session.mover(),
            outcome: *session.outcome(),
            winning_line: session.outcome().winning_line().to_vec(),
            scores: session.scores(),
            status_text: session.status().text().to_string(),
            urgency: session.status().urgency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_new_session() {
        let snapshot = GameSession::new().snapshot();
        assert_eq!(snapshot.grid(), &[Square::Empty; 9]);
        assert_eq!(snapshot.mover(), &Player::X);
        assert_eq!(snapshot.outcome(), &Outcome::InProgress);
        assert!(snapshot.winning_line().is_empty());
        assert_eq!(snapshot.status_text(), "Turn: Player X");
        assert_eq!(snapshot.urgency(), &Urgency::Polite);
    }

    #[test]
    fn test_snapshot_marks_winning_line() {
        let mut session = GameSession::new();
        for index in [2, 0, 4, 1, 6] {
            session.submit_move(index).unwrap();
        }
        let snapshot = session.snapshot();
        assert!(snapshot.is_winning(Position::TopRight));
        assert!(snapshot.is_winning(Position::BottomLeft));
        assert!(!snapshot.is_winning(Position::TopLeft));
        assert_eq!(snapshot.square(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut session = GameSession::new();
        session.submit_move(4).unwrap();
        let json = serde_json::to_value(session.snapshot()).unwrap();

        assert_eq!(json["grid"][4], "X");
        assert!(json["grid"][0].is_null());
        assert_eq!(json["mover"], "O");
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["scores"]["draw"], 0);
        assert_eq!(json["urgency"], "polite");
    }
}
