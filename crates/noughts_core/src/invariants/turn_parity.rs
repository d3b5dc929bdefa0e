//! Turn parity invariant: players alternate X, O, X, O, ...

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: the mover follows from the mark counts.
///
/// X is to move exactly when both players have placed the same number of
/// marks. The turn also flips on the move that ends a round, so this
/// holds in every state.
pub struct TurnParityInvariant;

impl Invariant<GameSession> for TurnParityInvariant {
    fn holds(session: &GameSession) -> bool {
        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);
        let expected = if x == o { Player::X } else { Player::O };
        session.mover() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
