//! Variant rules plugged into the turn controller.
//!
//! A variant supplies a board shape, a move validator and a line
//! detector. Draw detection and the order of the terminal checks are
//! shared so every variant classifies a full board with a completed
//! line as a win.

use crate::board::{Board, Coord};
use crate::error::MoveError;
use crate::outcome::Outcome;
use crate::player::Player;

/// Rules of one board game variant.
pub trait Rules {
    /// A move as received from the input collaborator, before resolution.
    type Move: Copy + std::fmt::Debug;

    /// Human-readable variant name.
    const NAME: &'static str;
    /// Board height.
    const ROWS: usize;
    /// Board width.
    const COLS: usize;

    /// Creates an empty board of this variant's shape.
    fn new_board() -> Board {
        Board::new(Self::ROWS, Self::COLS)
    }

    /// Checks a move against the board and resolves its target cell.
    ///
    /// Pure: the board is never modified.
    fn validate(board: &Board, mv: &Self::Move) -> Result<Coord, MoveError>;

    /// True if `player` owns a completed line.
    fn is_winner(board: &Board, player: Player) -> bool;

    /// Classifies the board after `mover` placed a marker.
    ///
    /// Only the mover's marker is inspected.
    fn evaluate(board: &Board, mover: Player) -> Outcome {
        if Self::is_winner(board, mover) {
            Outcome::Win(mover)
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Variant-specific structural check of a reachable board.
    fn is_consistent(_board: &Board) -> bool {
        true
    }
}
