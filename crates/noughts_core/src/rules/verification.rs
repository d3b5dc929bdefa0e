//! Formal verification of the outcome evaluator using Kani.
//!
//! These harnesses check the evaluator over every possible board.

use super::evaluate;
use crate::{Board, Outcome, Square};

/// A reported winning line is always three squares owned by the winner.
#[kani::proof]
fn verify_winning_line_is_uniform() {
    let board: Board = kani::any();

    if let Outcome::Decisive { winner, line } = evaluate(&board) {
        for pos in line {
            assert!(board.get(pos) == Square::Occupied(winner));
        }
    }
}

/// Draw is reported only for full boards, in-progress only for non-full ones.
#[kani::proof]
fn verify_draw_requires_full_board() {
    let board: Board = kani::any();

    match evaluate(&board) {
        Outcome::Draw => assert!(board.is_full()),
        Outcome::InProgress => assert!(!board.is_full()),
        Outcome::Decisive { .. } => {}
    }
}

/// Same board, same answer.
#[kani::proof]
fn verify_evaluate_is_deterministic() {
    let board: Board = kani::any();
    assert!(evaluate(&board) == evaluate(&board));
}
