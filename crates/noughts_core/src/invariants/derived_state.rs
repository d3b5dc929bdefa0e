//! Derived state invariant: stored outcome and status match the board.

use super::super::{rules, status, GameSession};
use super::Invariant;

/// Invariant: the cached outcome equals a fresh evaluation of the board and
/// the cached status equals a fresh projection of that outcome.
pub struct DerivedStateInvariant;

impl Invariant<GameSession> for DerivedStateInvariant {
    fn holds(session: &GameSession) -> bool {
        let outcome = rules::evaluate(session.board());
        outcome == *session.outcome() && status::project(&outcome, session.mover()) == *session.status()
    }

    fn description() -> &'static str {
        "Outcome and status are re-derived from the board after every change"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Player};

    #[test]
    fn test_holds_after_draw() {
        let mut session = GameSession::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.submit_move(index).unwrap();
        }
        assert_eq!(session.outcome(), &Outcome::Draw);
        assert!(DerivedStateInvariant::holds(&session));
    }

    #[test]
    fn test_stale_status_violates() {
        let mut session = GameSession::new();
        session.submit_move(4).unwrap();
        session.status = status::project(&Outcome::InProgress, Player::X);
        assert!(!DerivedStateInvariant::holds(&session));
    }
}
