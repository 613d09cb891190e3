//! Gravity: where a token dropped into a column comes to rest.

use parlor_core::{Board, Coord};
use tracing::instrument;

/// Lowest empty row of a column, or `None` if the column is full or
/// outside the board.
pub fn landing_row(board: &Board, col: usize) -> Option<usize> {
    if col >= board.cols() {
        return None;
    }
    (0..board.rows()).find(|&row| board.get(Coord::new(row, col)).is_some_and(|c| c.is_empty()))
}

/// Landing cell of every non-full column, in column order.
#[instrument(skip(board))]
pub fn available_moves(board: &Board) -> Vec<Coord> {
    (0..board.cols())
        .filter_map(|col| landing_row(board, col).map(|row| Coord::new(row, col)))
        .collect()
}

/// True if no occupied cell sits above an empty one.
pub fn is_settled(board: &Board) -> bool {
    board.iter().all(|(coord, cell)| {
        cell.is_empty()
            || coord.row == 0
            || board
                .get(Coord::new(coord.row - 1, coord.col))
                .is_some_and(|below| !below.is_empty())
    })
}
