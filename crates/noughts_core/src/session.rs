//! The game session: one board, one score ledger, two entry points.

use super::action::{Move, MoveRejection};
use super::contracts::LegalMove;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::ledger::{ScoreLedger, Scores};
use super::snapshot::Snapshot;
use super::status::{self, Status};
use super::{rules, Board, Outcome, Player, Square};
use tracing::{debug, info, instrument};

/// A tic-tac-toe session spanning any number of rounds.
///
/// All mutation goes through [`GameSession::submit_move`] and
/// [`GameSession::reset`]. Each of them ends by re-deriving the outcome
/// and the status, so every read sees a consistent state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) mover: Player,
    pub(crate) outcome: Outcome,
    pub(crate) status: Status,
    pub(crate) ledger: ScoreLedger,
}

impl GameSession {
    /// Creates a session with an empty board, X to move and zero scores.
    #[instrument]
    pub fn new() -> Self {
        let board = Board::new();
        let outcome = rules::evaluate(&board);
        Self {
            status: status::project(&outcome, Player::X),
            board,
            mover: Player::X,
            outcome,
            ledger: ScoreLedger::new(),
        }
    }

    /// Places the mover's mark on cell `index` (0-8, row-major).
    ///
    /// The move is ignored if the round is over, the index is out of range
    /// or the cell is taken; the returned rejection says which. An accepted
    /// move flips the mover, re-evaluates the outcome, counts the round if
    /// this move ended it and re-projects the status.
    #[instrument(skip(self), fields(mover = %self.mover))]
    pub fn submit_move(&mut self, index: usize) -> Result<Move, MoveRejection> {
        let position = match LegalMove::check(self, index) {
            Ok(position) => position,
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                return Err(rejection);
            }
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        let action = Move::new(self.mover, position);
        self.board.set(position, Square::Occupied(action.player));
        self.mover = self.mover.opponent();

        self.outcome = rules::evaluate(&self.board);
        if self.outcome.is_over() {
            // Only reachable on the move that ends the round: later moves
            // are turned away by the status gate above.
            self.ledger.record_result(&self.outcome);
            info!(outcome = %self.outcome, scores = %self.ledger.totals(), "Round finished");
        }
        self.status = status::project(&self.outcome, self.mover);

        #[cfg(debug_assertions)]
        self.verify_postcondition(&before);

        debug!(%action, status = %self.status, "Move accepted");
        Ok(action)
    }

    /// Starts a new round: empty board, X to move. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.mover = Player::X;
        self.outcome = rules::evaluate(&self.board);
        self.status = status::project(&self.outcome, self.mover);

        debug_assert!(TicTacToeInvariants::check_all(self).is_ok());
        info!(scores = %self.ledger.totals(), "Round reset");
    }

    /// Panics if the last move broke the move contract.
    #[cfg(debug_assertions)]
    fn verify_postcondition(&self, before: &Self) {
        use super::contracts::{Contract, MoveContract};

        if let Err(violation) = MoveContract::post(before, self) {
            tracing::error!(%violation, "Move postcondition failed");
            panic!("move postcondition failed: {}", violation);
        }
    }

    /// Read-only projection of the whole session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the projected status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the score totals.
    pub fn scores(&self) -> Scores {
        self.ledger.totals()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Urgency;
    use crate::Position;

    fn play(session: &mut GameSession, moves: &[usize]) {
        for &index in moves {
            session.submit_move(index).unwrap();
        }
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.mover(), Player::X);
        assert_eq!(session.outcome(), &Outcome::InProgress);
        assert_eq!(session.status().text(), "Turn: Player X");
        assert_eq!(session.scores(), Scores::default());
    }

    #[test]
    fn test_accepted_move_flips_mover() {
        let mut session = GameSession::new();
        let action = session.submit_move(4).unwrap();
        assert_eq!(action, Move::new(Player::X, Position::Center));
        assert_eq!(session.mover(), Player::O);
        assert_eq!(session.status().text(), "Turn: Player O");
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut session = GameSession::new();
        play(&mut session, &[4]);
        let before = session.clone();

        assert_eq!(
            session.submit_move(4),
            Err(MoveRejection::SquareOccupied(Position::Center))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut session = GameSession::new();
        assert_eq!(session.submit_move(9), Err(MoveRejection::OutOfRange(9)));
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_winning_move_counts_once() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 3, 1, 4, 2]);

        assert_eq!(session.outcome().winner(), Some(Player::X));
        assert_eq!(session.scores(), Scores::new(1, 0, 0));
        assert_eq!(session.status().urgency(), Urgency::Assertive);

        assert_eq!(session.submit_move(8), Err(MoveRejection::RoundOver));
        assert_eq!(session.scores(), Scores::new(1, 0, 0));
        // Reading again never re-counts.
        let _ = session.snapshot();
        assert_eq!(session.scores(), Scores::new(1, 0, 0));
    }

    #[test]
    fn test_round_over_takes_priority_over_range() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 3, 1, 4, 2]);
        assert_eq!(session.submit_move(42), Err(MoveRejection::RoundOver));
    }

    #[test]
    fn test_reset_keeps_scores() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 3, 1, 4, 2]);
        session.reset();

        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.mover(), Player::X);
        assert_eq!(session.outcome(), &Outcome::InProgress);
        assert!(session.outcome().winning_line().is_empty());
        assert_eq!(session.scores(), Scores::new(1, 0, 0));
    }

    #[test]
    fn test_o_can_win_next_round() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 3, 1, 4, 2]);
        session.reset();
        play(&mut session, &[0, 2, 1, 4, 8, 6]);

        assert_eq!(session.outcome().winner(), Some(Player::O));
        assert_eq!(session.scores(), Scores::new(1, 1, 0));
        assert_eq!(session.status().text(), "Player O wins!");
    }
}
