//! Turn controller: one board, strict alternation, explicit replay.
//!
//! ```text
//! AwaitingMove(p) --accepted, ongoing--> AwaitingMove(p.opponent())
//! AwaitingMove(p) --accepted, terminal--> GameOver(outcome)
//! AwaitingMove(p) --rejected--> AwaitingMove(p)
//! GameOver(_) --request_replay--> AwaitingReplayDecision
//! AwaitingReplayDecision --yes--> AwaitingMove(X) on a cleared board
//! AwaitingReplayDecision --no--> Terminated
//! ```

use crate::board::{Board, Coord};
use crate::error::{MoveError, PhaseError};
use crate::outcome::Outcome;
use crate::player::Player;
use crate::rules::Rules;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::{debug, info, instrument};

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for `Player` to submit a move.
    AwaitingMove(Player),
    /// A move was applied and the detector is running.
    Evaluating,
    /// The current game ended.
    GameOver(Outcome),
    /// Waiting for the players to choose whether to play again.
    AwaitingReplayDecision,
    /// The session is over; no further transitions.
    Terminated,
}

/// An accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Who moved.
    pub player: Player,
    /// Resolved target cell.
    pub coord: Coord,
    /// Board classification after the move.
    pub outcome: Outcome,
}

/// A run of games of one variant, sharing a single board.
///
/// The session is the only writer of its board; callers get `&Board`.
#[derive(Debug, Clone)]
pub struct Session<R: Rules> {
    board: Board,
    phase: Phase,
    history: Vec<Coord>,
    _rules: PhantomData<R>,
}

impl<R: Rules> Session<R> {
    /// Starts a session with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        info!(variant = R::NAME, "New game: X goes first");
        Self {
            board: R::new_board(),
            phase: Phase::AwaitingMove(Player::X),
            history: Vec::new(),
            _rules: PhantomData,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player to move, if a move is expected.
    pub fn current_player(&self) -> Option<Player> {
        match self.phase {
            Phase::AwaitingMove(player) => Some(player),
            _ => None,
        }
    }

    /// Cells filled in the current game, in play order.
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    /// Checks a move without applying it.
    pub fn validate(&self, mv: &R::Move) -> Result<Coord, MoveError> {
        if self.current_player().is_none() {
            return Err(MoveError::GameOver);
        }
        R::validate(&self.board, mv)
    }

    /// Validates and applies a move for the current player.
    ///
    /// # Errors
    ///
    /// Returns the validator's rejection, or `MoveError::GameOver` when no
    /// move is expected. On error nothing changes.
    #[instrument(skip(self), fields(variant = R::NAME, player = ?self.current_player()))]
    pub fn submit(&mut self, mv: R::Move) -> Result<Placement, MoveError> {
        let player = self.current_player().ok_or(MoveError::GameOver)?;

        let coord = R::validate(&self.board, &mv).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        self.board.set(coord, player.marker())?;
        self.history.push(coord);
        self.phase = Phase::Evaluating;

        let outcome = R::evaluate(&self.board, player);
        debug!(%coord, %outcome, "Move applied");

        self.phase = if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game over");
            Phase::GameOver(outcome)
        } else {
            Phase::AwaitingMove(player.opponent())
        };

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(Placement {
            player,
            coord,
            outcome,
        })
    }

    /// Moves a finished game to the replay decision.
    pub fn request_replay(&mut self) -> Result<Outcome, PhaseError> {
        match self.phase {
            Phase::GameOver(outcome) => {
                self.phase = Phase::AwaitingReplayDecision;
                Ok(outcome)
            }
            actual => Err(PhaseError {
                expected: "GameOver",
                actual,
            }),
        }
    }

    /// Applies the replay decision: a fresh game with X to move, or termination.
    #[instrument(skip(self), fields(variant = R::NAME))]
    pub fn decide_replay(&mut self, play_again: bool) -> Result<Phase, PhaseError> {
        if self.phase != Phase::AwaitingReplayDecision {
            return Err(PhaseError {
                expected: "AwaitingReplayDecision",
                actual: self.phase,
            });
        }

        self.phase = if play_again {
            self.board.reset();
            self.history.clear();
            info!("New game: X goes first");
            Phase::AwaitingMove(Player::X)
        } else {
            info!("Session terminated");
            Phase::Terminated
        };
        Ok(self.phase)
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::invariants::{InvariantSet, SessionInvariants};

        if let Err(violations) = SessionInvariants::check_all(self) {
            for v in &violations {
                tracing::warn!(invariant = v.invariant, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Session invariants violated");
        }
    }
}

impl<R: Rules> Default for Session<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single-row board: a line is the whole row.
    #[derive(Debug, Clone)]
    struct Strip;

    impl Rules for Strip {
        type Move = usize;
        const NAME: &'static str = "strip";
        const ROWS: usize = 1;
        const COLS: usize = 3;

        fn validate(board: &Board, col: &usize) -> Result<Coord, MoveError> {
            if board.cell_at(0, *col)?.is_empty() {
                Ok(Coord::new(0, *col))
            } else {
                Err(MoveError::CellOccupied { row: 0, col: *col })
            }
        }

        fn is_winner(board: &Board, player: Player) -> bool {
            board.row(0).all(|c| c == player.marker())
        }
    }

    #[test]
    fn test_starts_with_x() {
        let session = Session::<Strip>::new();
        assert_eq!(session.phase(), Phase::AwaitingMove(Player::X));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_rejection_keeps_turn() {
        let mut session = Session::<Strip>::new();
        session.submit(0).unwrap();
        let before = session.board().clone();

        assert!(matches!(session.submit(0), Err(MoveError::CellOccupied { .. })));
        assert!(matches!(session.submit(9), Err(MoveError::OutOfRange { .. })));
        assert_eq!(session.current_player(), Some(Player::O));
        assert_eq!(session.board(), &before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut session = Session::<Strip>::new();
        session.submit(0).unwrap();
        session.submit(1).unwrap();
        let last = session.submit(2).unwrap();
        assert_eq!(last.outcome, Outcome::Draw);
        assert_eq!(session.phase(), Phase::GameOver(Outcome::Draw));
        assert_eq!(session.submit(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_replay_cycle() {
        let mut session = Session::<Strip>::new();
        for col in 0..3 {
            session.submit(col).unwrap();
        }
        assert!(session.decide_replay(true).is_err());
        assert_eq!(session.request_replay(), Ok(Outcome::Draw));
        assert!(session.request_replay().is_err());

        assert_eq!(session.decide_replay(true), Ok(Phase::AwaitingMove(Player::X)));
        assert!(!session.board().is_full());
        assert!(session.history().is_empty());

        for col in 0..3 {
            session.submit(col).unwrap();
        }
        session.request_replay().unwrap();
        assert_eq!(session.decide_replay(false), Ok(Phase::Terminated));
        assert_eq!(session.submit(0), Err(MoveError::GameOver));
        assert!(session.request_replay().is_err());
    }
}
