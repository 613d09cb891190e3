//! Pure tic-tac-toe game logic on a 3x3 board.
//!
//! Moves are (row, column) pairs in `0..3`, row first. The
//! [`TicTacToe`] rules plug into [`parlor_core::Session`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod rules;

use parlor_core::{Board, Coord, MoveError, Player, Rules, Session};

pub use rules::{check_win, validate};

/// Board side length.
pub const SIZE: usize = 3;

/// Tic-tac-toe rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl Rules for TicTacToe {
    type Move = Coord;

    const NAME: &'static str = "tic-tac-toe";
    const ROWS: usize = SIZE;
    const COLS: usize = SIZE;

    fn validate(board: &Board, mv: &Coord) -> Result<Coord, MoveError> {
        rules::validate(mv.row, mv.col, board)
    }

    fn is_winner(board: &Board, player: Player) -> bool {
        rules::check_win(board, player)
    }
}

/// A tic-tac-toe session.
pub type TicTacToeSession = Session<TicTacToe>;
