//! Headless replay: feed a move list to a fresh session and report.

use noughts_core::{Board, GameSession, MoveRejection, Snapshot};
use std::fmt::Write;
use tracing::{info, instrument, warn};

/// Result of replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    /// Final state of the session.
    pub snapshot: Snapshot,
    /// Moves that were ignored: 1-based place in the list, and why.
    pub skipped: Vec<(usize, MoveRejection)>,
}

/// Replays `moves` (cell indices) on a new session.
#[instrument]
pub fn replay(moves: &[usize]) -> ReplayReport {
    let mut session = GameSession::new();
    let mut skipped = Vec::new();

    for (n, &index) in moves.iter().enumerate() {
        if let Err(rejection) = session.submit_move(index) {
            warn!(move_number = n + 1, index, %rejection, "Skipping move");
            skipped.push((n + 1, rejection));
        }
    }

    info!(status = %session.status(), scores = %session.scores(), "Replay finished");
    ReplayReport {
        snapshot: session.snapshot(),
        skipped,
    }
}

impl ReplayReport {
    /// Plain-text rendering: skipped moves, board, status and score.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (n, rejection) in &self.skipped {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "skipped move {}: {}", n, rejection);
        }
        let board = Board::from_squares(*self.snapshot.grid());
        let _ = writeln!(out, "{}", board.display());
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.snapshot.status_text());
        let _ = write!(out, "Score: {}", self.snapshot.scores());
        out
    }

    /// Pretty JSON rendering of the final snapshot.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Outcome, Player, Position};

    #[test]
    fn test_replay_reports_win() {
        let report = replay(&[0, 3, 1, 4, 2]);
        assert!(report.skipped.is_empty());
        assert_eq!(report.snapshot.outcome().winner(), Some(Player::X));
        assert_eq!(
            report.to_text(),
            "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nPlayer X wins!\nScore: X: 1  O: 0  Draws: 0"
        );
    }

    #[test]
    fn test_replay_lists_skipped_moves() {
        let report = replay(&[4, 4, 12]);
        assert_eq!(
            report.skipped,
            vec![
                (2, MoveRejection::SquareOccupied(Position::Center)),
                (3, MoveRejection::OutOfRange(12)),
            ]
        );
        assert_eq!(report.snapshot.outcome(), &Outcome::InProgress);
        assert!(report.to_text().starts_with(
            "skipped move 2: Center (row 2, column 2) is already occupied\nskipped move 3:"
        ));
    }

    #[test]
    fn test_replay_json() {
        let report = replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["outcome"], "Draw");
        assert_eq!(json["status_text"], "Draw! Nobody wins.");
        assert_eq!(json["urgency"], "assertive");
        assert_eq!(json["scores"]["draw"], 1);
    }
}
