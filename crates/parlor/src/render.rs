//! Text boards.

use crate::input::column_letter;
use parlor_core::{Board, Coord};
use std::fmt;

/// Tic-tac-toe board with row and column indices.
///
/// ```text
/// ------------------
/// |R\C| 0 | 1 | 2 |
/// ------------------
/// | 0 | X |   |   |
/// ------------------
/// ```
pub struct TicTacToeView<'a>(pub &'a Board);

impl fmt::Display for TicTacToeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let rule = "-".repeat(6 + 4 * board.cols());

        writeln!(f, "{}", rule)?;
        write!(f, "|R\\C|")?;
        for col in 0..board.cols() {
            write!(f, " {} |", col)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", rule)?;

        for row in 0..board.rows() {
            write!(f, "| {} |", row)?;
            for cell in board.row(row) {
                write!(f, " {} |", cell.symbol())?;
            }
            writeln!(f)?;
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

/// Connect four board, top row first, rows numbered from 1 at the bottom
/// and columns lettered from `a`.
pub struct ConnectFourView<'a>(pub &'a Board);

impl fmt::Display for ConnectFourView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let rule = format!(" {}", "-".repeat(5 + 4 * board.cols()));

        writeln!(f, "{}", rule)?;
        for row in (0..board.rows()).rev() {
            write!(f, "| {} |", row + 1)?;
            for cell in board.row(row) {
                write!(f, " {} |", cell.symbol())?;
            }
            writeln!(f)?;
            writeln!(f, "{}", rule)?;
        }

        write!(f, "|R\\C|")?;
        for col in 0..board.cols() {
            write!(f, " {} |", column_letter(col))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", rule)
    }
}

/// Console label of a connect four cell, e.g. `a1` for the bottom-left.
pub fn drop_label(coord: Coord) -> String {
    format!("{}{}", column_letter(coord.col), coord.row + 1)
}
