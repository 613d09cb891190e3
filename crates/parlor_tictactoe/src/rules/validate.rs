//! Move validation for tic-tac-toe.

use crate::SIZE;
use parlor_core::{Board, Coord, MoveError};
use tracing::instrument;

/// Checks that (row, col) is on the board and empty.
///
/// Bounds are checked before occupancy.
#[instrument(skip(board))]
pub fn validate(row: usize, col: usize, board: &Board) -> Result<Coord, MoveError> {
    if row >= SIZE || col >= SIZE {
        return Err(MoveError::OutOfRange {
            row,
            col,
            rows: SIZE,
            cols: SIZE,
        });
    }

    if !board.cell_at(row, col)?.is_empty() {
        return Err(MoveError::CellOccupied { row, col });
    }

    Ok(Coord::new(row, col))
}
