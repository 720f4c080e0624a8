//! Shared game session for the HTTP front end.

use crate::games::connect_four::{COLS, Cell, Game, GameStatus, MoveError, Player, ROWS};
use derive_getters::Getters;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::{info, instrument, warn};

/// The single process-wide game instance.
///
/// Every state-mutating operation acquires one exclusive lock for its
/// whole check-then-act cycle, so interleaved requests cannot corrupt
/// the board or observe an inconsistent win evaluation. Cloning the
/// session clones the handle, not the game; the instance lives for the
/// whole process and is reset in place, never replaced.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Arc<Mutex<Game>>,
}

impl GameSession {
    /// Creates a session with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        info!("creating game session");
        Self {
            game: Arc::new(Mutex::new(Game::new())),
        }
    }

    /// Plays a move from raw form input.
    ///
    /// Non-numeric input records the invalid-column message without
    /// entering the engine's own range check; numeric input is passed
    /// through to [`Game::play`].
    #[instrument(skip(self))]
    pub fn play_input(&self, raw: &str) -> Result<(), MoveError> {
        let mut game = self.game.lock().unwrap();
        match raw.trim().parse::<isize>() {
            Ok(column) => game.play(column),
            Err(_) => {
                warn!(raw, "column input is not a number");
                Err(game.reject(MoveError::InvalidColumn))
            }
        }
    }

    /// Plays a move at the given column index.
    #[instrument(skip(self))]
    pub fn play(&self, column: isize) -> Result<(), MoveError> {
        self.game.lock().unwrap().play(column)
    }

    /// Resets the game in place. Always succeeds.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        self.game.lock().unwrap().reset();
    }

    /// Copies the current state out under the lock.
    ///
    /// Rendering and the JSON API work from this snapshot, so a
    /// concurrent move can never be observed half-applied.
    pub fn snapshot(&self) -> GameSnapshot {
        let game = self.game.lock().unwrap();
        GameSnapshot {
            board: *game.board().rows(),
            to_move: game.to_move(),
            status: game.status(),
            message: game.message().to_string(),
            moves: game.history().len(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable copy of the game state for rendering and the JSON API.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct GameSnapshot {
    /// Board cells, top row first.
    board: [[Cell; COLS]; ROWS],
    /// Player to move next.
    to_move: Player,
    /// Game status.
    status: GameStatus,
    /// Status message for the page, empty when there is nothing to say.
    message: String,
    /// Number of accepted moves so far.
    moves: usize,
}
