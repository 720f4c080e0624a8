//! First-class action types for Connect Four.
//!
//! Moves are domain events, not side effects. An accepted move is
//! recorded in the game history; a rejected one leaves no trace on
//! the board.

use super::Player;
use serde::{Deserialize, Serialize};

/// A move in Connect Four: a player dropping a piece into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The column the piece was dropped into (zero-based).
    pub column: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, column: usize) -> Self {
        Self { player, column }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> column {}", self.player, self.column)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game has already reached a terminal state.
    #[display("Game over. Reset to start a new game.")]
    GameOver,

    /// The column is not a valid index, or the input was not a number.
    #[display("Invalid column.")]
    InvalidColumn,

    /// The target column has no empty cell left.
    #[display("That column is full.")]
    ColumnFull,
}
