//! Pure connect four game logic on a 6x7 board with gravity.
//!
//! Row 0 is the floor and column 0 the leftmost column. A move names a
//! column and, in the explicit form, the row the player expects the
//! token to land on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod gravity;
pub mod rules;

use parlor_core::{Board, Coord, MoveError, Player, Rules, Session};
use serde::{Deserialize, Serialize};

pub use gravity::{available_moves, is_settled, landing_row};
pub use rules::{check_win, validate_column, validate_drop};

/// Board height.
pub const ROWS: usize = 6;
/// Board width.
pub const COLS: usize = 7;
/// Markers in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// A proposed drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropMove {
    /// Column plus the row the token should occupy; gravity is checked.
    At {
        /// Target column.
        col: usize,
        /// Target row, 0 = bottom.
        row: usize,
    },
    /// Column only; the landing row is resolved by gravity.
    Column(usize),
}

impl DropMove {
    /// Returns the targeted column.
    pub fn col(&self) -> usize {
        match *self {
            DropMove::At { col, .. } | DropMove::Column(col) => col,
        }
    }
}

/// Connect four rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectFour;

impl Rules for ConnectFour {
    type Move = DropMove;

    const NAME: &'static str = "connect-four";
    const ROWS: usize = ROWS;
    const COLS: usize = COLS;

    fn validate(board: &Board, mv: &DropMove) -> Result<Coord, MoveError> {
        let col = mv.col();
        match *mv {
            DropMove::At { row, .. } => rules::validate_drop(col, row, board),
            DropMove::Column(_) => rules::validate_column(col, board),
        }
    }

    fn is_winner(board: &Board, player: Player) -> bool {
        rules::check_win(board, player)
    }

    fn is_consistent(board: &Board) -> bool {
        gravity::is_settled(board)
    }
}

/// A connect four session.
pub type ConnectFourSession = Session<ConnectFour>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_move_forms_name_their_column() {
        assert_eq!(DropMove::At { col: 4, row: 2 }.col(), 4);
        assert_eq!(DropMove::Column(6).col(), 6);
    }

    #[test]
    fn test_both_forms_resolve_to_the_same_cell() {
        let board = ConnectFour::new_board();
        let explicit = ConnectFour::validate(&board, &DropMove::At { col: 3, row: 0 });
        let column = ConnectFour::validate(&board, &DropMove::Column(3));
        assert_eq!(explicit, Ok(Coord::new(0, 3)));
        assert_eq!(explicit, column);
    }
}
