//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] snapshot. Rules are separated from
//! session state so they can be checked and proven in isolation.

pub mod win;

#[cfg(kani)]
mod verification;

pub use win::{winning_line, LINES};

use super::{Board, Outcome};
use tracing::{instrument, trace};

/// Classifies `board` as in progress, won or drawn.
///
/// Lines are scanned in [`LINES`] order and the first completed one wins.
/// A full board without a completed line is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = match winning_line(board) {
        Some((winner, line)) => Outcome::Decisive { winner, line },
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    };
    trace!(%outcome, "Evaluated board");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn board_from(marks: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(marks.chars()) {
            *square = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_every_line_is_decisive() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let mut squares = [Square::Empty; 9];
                for pos in line {
                    squares[pos.to_index()] = Square::Occupied(player);
                }
                let outcome = evaluate(&Board::from_squares(squares));
                assert_eq!(outcome, Outcome::Decisive { winner: player, line });
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board_from("XOXXOOOXX")), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let outcome = evaluate(&board_from("XXXOOXXOO"));
        assert_eq!(
            outcome,
            Outcome::Decisive {
                winner: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_first_line_in_order_wins_on_degenerate_board() {
        // Rows come before columns.
        let outcome = evaluate(&board_from("XXXX..X.."));
        assert_eq!(outcome.winning_line(), &LINES[0]);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let board = board_from("XO.OX...X");
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
