//! Win detection logic for connect four.
//!
//! Every line of four has an end cell from which one of the directions
//! below reaches the other three cells, so scanning all origins in these
//! four directions finds every line.

use crate::WIN_LENGTH;
use parlor_core::{Board, Coord, Player};
use tracing::instrument;

/// (row, column) steps: right, down, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks whether `player` has four markers in a row anywhere.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    let marker = player.marker();
    board
        .iter()
        .filter(|&(_, cell)| cell == marker)
        .any(|(origin, _)| {
            DIRECTIONS
                .iter()
                .any(|&(d_row, d_col)| run_matches(board, origin, d_row, d_col, player))
        })
}

/// True if the cell at `origin` and the next `WIN_LENGTH - 1` cells in
/// the given direction are all on the board and hold `player`'s marker.
fn run_matches(board: &Board, origin: Coord, d_row: isize, d_col: isize, player: Player) -> bool {
    (0..WIN_LENGTH as isize).all(|k| {
        origin
            .offset(d_row * k, d_col * k)
            .and_then(|coord| board.get(coord))
            == Some(player.marker())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{COLS, ROWS};

    fn board_with(player: Player, cells: &[(usize, usize)]) -> Board {
        let mut board = Board::new(ROWS, COLS);
        for &(row, col) in cells {
            board.set(Coord::new(row, col), player.marker()).unwrap();
        }
        board
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(Player::X, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert!(check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let board = board_with(Player::O, &[(3, 3), (3, 4), (3, 5), (3, 6)]);
        assert!(check_win(&board, Player::O));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(Player::O, &[(2, 6), (3, 6), (4, 6), (5, 6)]);
        assert!(check_win(&board, Player::O));
    }

    #[test]
    fn test_diagonal_wins() {
        let rising = board_with(Player::X, &[(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert!(check_win(&rising, Player::X));

        let falling = board_with(Player::X, &[(0, 6), (1, 5), (2, 4), (3, 3)]);
        assert!(check_win(&falling, Player::X));
    }

    #[test]
    fn test_three_is_not_enough() {
        let board = board_with(Player::X, &[(0, 0), (0, 1), (0, 2), (1, 3), (2, 3)]);
        assert!(!check_win(&board, Player::X));
    }

    #[test]
    fn test_line_does_not_wrap_rows() {
        // (0, 5), (0, 6), (1, 0), (1, 1) are adjacent in row-major order only.
        let board = board_with(Player::X, &[(0, 5), (0, 6), (1, 0), (1, 1)]);
        assert!(!check_win(&board, Player::X));
    }
}
