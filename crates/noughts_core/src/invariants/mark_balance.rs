//! Mark balance invariant: X never trails O and leads by at most one.

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: X opens every round, so the board holds either as many X
/// marks as O marks or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or exceed them by one"
    }
}
