//! Rectangular grid of cells.

use crate::error::MoveError;
use crate::player::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A zero-based (row, column) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps by a signed offset, returning `None` when it would go below zero.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size board, stored in row-major order.
///
/// Dimensions are chosen at creation and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Clears every cell without reallocating.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Checks whether a coordinate lies inside the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Returns the cell at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` if the coordinate is outside the grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        self.index(row, col)
            .map(|i| self.cells[i])
            .ok_or(MoveError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Returns the cell at a coordinate, or `None` outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord.row, coord.col).map(|i| self.cells[i])
    }

    /// Overwrites the cell at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` if the coordinate is outside the grid.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), MoveError> {
        let i = self.index(coord.row, coord.col).ok_or(MoveError::OutOfRange {
            row: coord.row,
            col: coord.col,
            rows: self.rows,
            cols: self.cols,
        })?;
        self.cells[i] = cell;
        Ok(())
    }

    /// True iff no cell is empty.
    #[instrument(skip(self))]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Counts the cells holding a player's marker.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.player() == Some(player)).count()
    }

    /// Iterates over every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Coord::new(i / self.cols, i % self.cols), *cell))
    }

    /// Iterates over one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cols).filter_map(move |col| self.get(Coord::new(row, col)))
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.cols + col)
    }
}
