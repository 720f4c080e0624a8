//! Game engine and rules for Connect Four.

mod draw;
mod win;

use super::action::{Move, MoveError};
use super::types::{Board, COLS, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Connect Four game engine.
///
/// Owns the board, turn order, status and status message. All mutation
/// goes through [`Game::play`] and [`Game::reset`]; a rejected move
/// records an explanatory message and leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    message: String,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board; player one moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            status: GameStatus::InProgress,
            message: String::new(),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next, frozen once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the current status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the accepted moves in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Drops a piece into the given column for the current player.
    ///
    /// The column is signed so out-of-range input, negatives included,
    /// is rejected by the engine rather than at the call site.
    /// Preconditions are checked in order: the game must be in progress,
    /// the column in range, the column not full. Each rejection records
    /// a message and leaves the board untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, column: isize) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(self.reject(MoveError::GameOver));
        }
        if !(0..COLS as isize).contains(&column) {
            return Err(self.reject(MoveError::InvalidColumn));
        }
        let col = column as usize;
        let player = self.to_move;
        let Some(row) = self.board.drop_piece(col, player) else {
            return Err(self.reject(MoveError::ColumnFull));
        };
        self.history.push(Move::new(player, col));

        if win::completes_line(&self.board, row, col) {
            self.status = GameStatus::Won(player);
            self.message = format!("{player} wins!");
            info!(%player, column = col, "game won");
        } else if draw::is_full(&self.board) {
            self.status = GameStatus::Draw;
            self.message = "It's a draw.".to_string();
            info!("game drawn");
        } else {
            self.to_move = player.opponent();
            self.message.clear();
            debug!(column = col, row, "move accepted");
        }
        Ok(())
    }

    /// Records a rejected move: the message is set, the board untouched.
    pub(crate) fn reject(&mut self, error: MoveError) -> MoveError {
        warn!(%error, "move rejected");
        self.message = error.to_string();
        error
    }

    /// Clears the board and starts over with player one to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting game");
        self.board = Board::new();
        self.to_move = Player::One;
        self.status = GameStatus::InProgress;
        self.message.clear();
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
