//! Win detection for Connect Four.

use super::super::types::{Board, Cell, Player};
use tracing::instrument;

/// The four axis directions a winning line can run along: horizontal,
/// vertical, and the two diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks whether the piece at the given cell completes a line of four.
///
/// Only the newly placed piece can complete a new line, so it is enough
/// to scan the four directions outward from it: count consecutive
/// same-player cells forward, count backward, and the line is a win when
/// `1 + forward + backward >= 4`. The first satisfied direction ends the
/// scan.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, row: usize, col: usize) -> bool {
    let Some(Cell::Occupied(player)) = board.get(row, col) else {
        return false;
    };

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = run_length(board, row, col, dr, dc, player);
        let backward = run_length(board, row, col, -dr, -dc, player);
        1 + forward + backward >= 4
    })
}

/// Counts consecutive cells of `player` extending from (row, col) along
/// the direction vector, excluding the starting cell itself.
fn run_length(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: Player,
) -> usize {
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while board.at(r, c) == Some(Cell::Occupied(player)) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(board: &mut Board, col: usize, player: Player) -> usize {
        board.drop_piece(col, player).expect("column open")
    }

    #[test]
    fn test_no_line_on_empty_board() {
        let board = Board::new();
        assert!(!completes_line(&board, 5, 0));
    }

    #[test]
    fn test_horizontal_line() {
        let mut board = Board::new();
        for col in 0..4 {
            put(&mut board, col, Player::One);
        }
        assert!(completes_line(&board, 5, 3));
    }

    #[test]
    fn test_horizontal_line_closed_from_the_middle() {
        let mut board = Board::new();
        put(&mut board, 0, Player::One);
        put(&mut board, 1, Player::One);
        put(&mut board, 3, Player::One);
        let row = put(&mut board, 2, Player::One);
        assert!(completes_line(&board, row, 2));
    }

    #[test]
    fn test_vertical_line() {
        let mut board = Board::new();
        let mut row = 0;
        for _ in 0..4 {
            row = put(&mut board, 2, Player::Two);
        }
        assert!(completes_line(&board, row, 2));
    }

    #[test]
    fn test_diagonal_up_right() {
        let mut board = Board::new();
        // Staircase of player-two pieces with player one on top of each step.
        for (col, height) in [(0, 0), (1, 1), (2, 2), (3, 3)] {
            for _ in 0..height {
                put(&mut board, col, Player::Two);
            }
        }
        let mut last = (0, 0);
        for col in 0..4 {
            last = (put(&mut board, col, Player::One), col);
        }
        assert!(completes_line(&board, last.0, last.1));
    }

    #[test]
    fn test_diagonal_down_right() {
        let mut board = Board::new();
        for (col, height) in [(0, 3), (1, 2), (2, 1), (3, 0)] {
            for _ in 0..height {
                put(&mut board, col, Player::Two);
            }
        }
        let mut last = (0, 0);
        for col in 0..4 {
            last = (put(&mut board, col, Player::One), col);
        }
        assert!(completes_line(&board, last.0, last.1));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_line() {
        let mut board = Board::new();
        for col in 0..3 {
            put(&mut board, col, Player::One);
        }
        assert!(!completes_line(&board, 5, 2));
    }

    #[test]
    fn test_opponent_piece_breaks_the_line() {
        let mut board = Board::new();
        put(&mut board, 0, Player::One);
        put(&mut board, 1, Player::One);
        put(&mut board, 2, Player::Two);
        put(&mut board, 3, Player::One);
        put(&mut board, 4, Player::One);
        assert!(!completes_line(&board, 5, 4));
    }
}
