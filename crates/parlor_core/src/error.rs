//! Rule violations and controller misuse.

use crate::session::Phase;

/// Reason a proposed move was rejected.
///
/// Every variant is recoverable: the controller keeps its board and
/// current player untouched and waits for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The coordinate lies outside the grid.
    #[display("Cell ({}, {}) is outside the {}x{} board", row, col, rows, cols)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board height.
        rows: usize,
        /// Board width.
        cols: usize,
    },

    /// The target cell already holds a marker.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },

    /// The target cell would float above an empty cell.
    #[display("Cell ({}, {}) has an empty cell below it", row, col)]
    IllegalGravityDrop {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },

    /// Every cell in the column is occupied.
    #[display("Column {} is full", col)]
    ColumnFull {
        /// Target column.
        col: usize,
    },

    /// No move is expected in the current phase.
    #[display("Game is not awaiting a move")]
    GameOver,
}

/// A controller transition was requested from the wrong phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Expected phase {}, found {:?}", expected, actual)]
pub struct PhaseError {
    /// Name of the phase the transition requires.
    pub expected: &'static str,
    /// Phase the controller was actually in.
    pub actual: Phase,
}
