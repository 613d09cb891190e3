//! Win detection logic for tic-tac-toe.

use parlor_core::{Board, Coord, Player};
use tracing::instrument;

const fn c(row: usize, col: usize) -> Coord {
    Coord { row, col }
}

/// The eight winning lines.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [c(0, 0), c(0, 1), c(0, 2)],
    [c(1, 0), c(1, 1), c(1, 2)],
    [c(2, 0), c(2, 1), c(2, 2)],
    // Columns
    [c(0, 0), c(1, 0), c(2, 0)],
    [c(0, 1), c(1, 1), c(2, 1)],
    [c(0, 2), c(1, 2), c(2, 2)],
    // Diagonals
    [c(0, 0), c(1, 1), c(2, 2)],
    [c(0, 2), c(1, 1), c(2, 0)],
];

/// Checks whether `player` holds all three cells of any line.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    let marker = Some(player.marker());
    LINES
        .iter()
        .any(|line| line.iter().all(|&coord| board.get(coord) == marker))
}
