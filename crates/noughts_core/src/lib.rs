//! Noughts core - tic-tac-toe session logic.
//!
//! A [`GameSession`] owns a 3x3 board, the player to move and a score
//! ledger. It is driven through exactly two mutating operations:
//!
//! - [`GameSession::submit_move`] places the mover's mark, re-evaluates the
//!   round and, on the move that ends it, counts the result once.
//! - [`GameSession::reset`] starts a new round and keeps the scores.
//!
//! Renderers read a [`Snapshot`] and never touch the session directly.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameSession, Player};
//!
//! let mut session = GameSession::new();
//! for index in [0, 3, 1, 4, 2] {
//!     session.submit_move(index).unwrap();
//! }
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.outcome().winner(), Some(Player::X));
//! assert_eq!(snapshot.status_text(), "Player X wins!");
//! assert_eq!(snapshot.scores().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod kani_support;
mod ledger;
mod outcome;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod status;
mod types;

pub use action::{Move, MoveRejection};
pub use contracts::{
    Contract, IndexInRange, LegalMove, MonotonicBoard, MoveContract, RoundIsLive, SquareIsEmpty,
};
pub use invariants::{
    DerivedStateInvariant, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    TicTacToeInvariants, TurnParityInvariant,
};
pub use ledger::{ScoreLedger, Scores};
pub use outcome::Outcome;
pub use position::Position;
pub use session::GameSession;
pub use snapshot::Snapshot;
pub use status::{project, Status, Urgency};
pub use types::{Board, Player, Square};
