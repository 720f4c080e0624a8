//! Draw detection for Connect Four.

use super::super::types::{Board, COLS};
use tracing::instrument;

/// Checks if the board is completely full.
///
/// Gravity fill means a column is full exactly when its top cell is
/// occupied, so scanning the top row covers the whole board.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    (0..COLS).all(|col| !board.is_column_open(col))
}
