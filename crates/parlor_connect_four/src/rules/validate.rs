//! Move validation for connect four.

use crate::gravity::landing_row;
use parlor_core::{Board, Coord, MoveError};
use tracing::instrument;

/// Checks an explicit (column, row) drop.
///
/// The target must be empty and, unless it is on the floor, rest on an
/// occupied cell. Only the cell directly below is inspected; a board
/// built through this check never holds a floating piece, so that is
/// equivalent to checking the whole column.
#[instrument(skip(board))]
pub fn validate_drop(col: usize, row: usize, board: &Board) -> Result<Coord, MoveError> {
    if !board.cell_at(row, col)?.is_empty() {
        return Err(MoveError::CellOccupied { row, col });
    }

    if row > 0 && board.cell_at(row - 1, col)?.is_empty() {
        return Err(MoveError::IllegalGravityDrop { row, col });
    }

    Ok(Coord::new(row, col))
}

/// Resolves a column to its landing cell.
#[instrument(skip(board))]
pub fn validate_column(col: usize, board: &Board) -> Result<Coord, MoveError> {
    if col >= board.cols() {
        return Err(MoveError::OutOfRange {
            row: 0,
            col,
            rows: board.rows(),
            cols: board.cols(),
        });
    }

    landing_row(board, col)
        .map(|row| Coord::new(row, col))
        .ok_or(MoveError::ColumnFull { col })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{COLS, ROWS};
    use parlor_core::Player;

    #[test]
    fn test_floor_is_valid() {
        let board = Board::new(ROWS, COLS);
        for col in 0..COLS {
            assert_eq!(validate_drop(col, 0, &board), Ok(Coord::new(0, col)));
        }
    }

    #[test]
    fn test_floating_drop_rejected() {
        let mut board = Board::new(ROWS, COLS);
        board.set(Coord::new(0, 3), Player::X.marker()).unwrap();

        assert_eq!(validate_drop(3, 1, &board), Ok(Coord::new(1, 3)));
        assert_eq!(
            validate_drop(3, 2, &board),
            Err(MoveError::IllegalGravityDrop { row: 2, col: 3 })
        );
        assert_eq!(
            validate_drop(3, 0, &board),
            Err(MoveError::CellOccupied { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_explicit_drop_out_of_range() {
        let board = Board::new(ROWS, COLS);
        assert!(matches!(
            validate_drop(COLS, 0, &board),
            Err(MoveError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_drop(0, ROWS, &board),
            Err(MoveError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_column_resolves_landing_row() {
        let mut board = Board::new(ROWS, COLS);
        assert_eq!(validate_column(5, &board), Ok(Coord::new(0, 5)));

        board.set(Coord::new(0, 5), Player::O.marker()).unwrap();
        assert_eq!(validate_column(5, &board), Ok(Coord::new(1, 5)));
    }

    #[test]
    fn test_column_full_and_out_of_range() {
        let mut board = Board::new(ROWS, COLS);
        for row in 0..ROWS {
            board.set(Coord::new(row, 0), Player::X.marker()).unwrap();
        }
        assert_eq!(validate_column(0, &board), Err(MoveError::ColumnFull { col: 0 }));
        assert!(matches!(
            validate_column(COLS, &board),
            Err(MoveError::OutOfRange { .. })
        ));
    }
}
