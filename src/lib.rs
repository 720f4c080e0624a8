//! Drop Four - a two-player Connect Four game with a server-rendered
//! web front end.
//!
//! # Architecture
//!
//! - **Games**: pure Connect Four rules (board, move legality, win and
//!   draw detection)
//! - **Session**: the single shared, lock-guarded game instance
//! - **Server**: axum routes rendering engine state to HTML
//!
//! # Example
//!
//! ```no_run
//! use drop_four::{GameSession, create_app};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let session = GameSession::new();
//! let app = create_app(session, "static".into());
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 8080)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod server;
mod session;
mod view;

// Crate-level exports - Game types (Connect Four)
pub use games::connect_four::{
    Board, COLS, Cell, Game, GameStatus, Move, MoveError, Player, ROWS,
};

// Crate-level exports - Server types
pub use server::{PlayForm, create_app};

// Crate-level exports - Session management
pub use session::{GameSession, GameSnapshot};
