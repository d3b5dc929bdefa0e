//! Contract-based validation for session moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, action)} action {Q(before, after)}`.

use super::action::MoveRejection;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::session::GameSession;
use super::{Position, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round must still be live.
///
/// Reads the projected status, not the board.
pub struct RoundIsLive;

impl RoundIsLive {
    /// Rejects moves once the status reports the round as over.
    pub fn check(session: &GameSession) -> Result<(), MoveRejection> {
        if session.status().is_round_over() {
            Err(MoveRejection::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index must name one of the 9 cells.
pub struct IndexInRange;

impl IndexInRange {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, MoveRejection> {
        Position::from_index(index).ok_or(MoveRejection::OutOfRange(index))
    }
}

/// Precondition: the target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    pub fn check(session: &GameSession, position: Position) -> Result<(), MoveRejection> {
        if session.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(position))
        }
    }
}

/// Composite precondition: round live, index in range, square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates a move and returns the position it targets.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession, index: usize) -> Result<Position, MoveRejection> {
        RoundIsLive::check(session)?;
        let position = IndexInRange::check(index)?;
        SquareIsEmpty::check(session, position)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: marks are never overwritten and exactly one new mark,
/// belonging to the player who was to move, appears per move.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Compares the board before and after a move.
    pub fn holds(before: &GameSession, after: &GameSession) -> bool {
        let mut added = 0;
        for pos in Position::iter() {
            match (before.board().get(pos), after.board().get(pos)) {
                (Square::Empty, Square::Empty) => {}
                (Square::Empty, Square::Occupied(player)) => {
                    if player != before.mover() {
                        return false;
                    }
                    added += 1;
                }
                (old, new) => {
                    if old != new {
                        return false;
                    }
                }
            }
        }
        added == 1
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `submit_move`.
///
/// Preconditions:
/// - Round is live
/// - Index is in range
/// - Square is empty
///
/// Postconditions:
/// - Board is monotonic with exactly one new mark
/// - All session invariants hold
pub struct MoveContract;

impl Contract<GameSession, usize> for MoveContract {
    fn pre(session: &GameSession, index: &usize) -> Result<(), MoveRejection> {
        LegalMove::check(session, *index).map(|_| ())
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), InvariantViolation> {
        let mut failures = Vec::new();
        if !MonotonicBoard::holds(before, after) {
            failures.push("Exactly one new mark per move, none overwritten".to_string());
        }
        if let Err(violations) = TicTacToeInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(InvariantViolation::new(format!(
                "Postcondition failed: {}",
                failures.join("; ")
            )))
        }
    }
}
