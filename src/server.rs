//! HTTP front end: router and request handlers.
//!
//! The handlers are thin glue over the [`GameSession`]: extract form
//! input, call into the engine, redirect or render. Only rendering
//! failures surface as hard server errors; every game-logic rejection
//! comes back to the page as a status message.

use crate::session::{GameSession, GameSnapshot};
use crate::view;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tracing::{debug, error, instrument};

/// Form body for the move endpoint.
///
/// The column arrives as text; parsing is deferred to the session guard
/// so bad input turns into a status message instead of a rejected
/// request.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayForm {
    /// Raw column value submitted by the page.
    pub column: String,
}

/// Builds the application router.
///
/// Separated from startup so integration tests can drive the app
/// directly with `tower::ServiceExt::oneshot`.
pub fn create_app(session: GameSession, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/play", get(redirect_home).post(play))
        .route("/reset", get(redirect_home).post(reset))
        .route("/state", get(state))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(session)
}

/// Renders the game page from a locked snapshot.
#[instrument(skip(session))]
async fn home(State(session): State<GameSession>) -> Result<Html<String>, StatusCode> {
    let snapshot = session.snapshot();
    view::render_page(&snapshot).map(Html).map_err(|e| {
        error!(error = %e, "failed to render page");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Applies a move and redirects back to the board.
#[instrument(skip(session, form), fields(column = %form.column))]
async fn play(State(session): State<GameSession>, Form(form): Form<PlayForm>) -> Redirect {
    if let Err(error) = session.play_input(&form.column) {
        debug!(%error, "move rejected");
    }
    Redirect::to("/")
}

/// Reinitializes the game and redirects back to the board.
#[instrument(skip(session))]
async fn reset(State(session): State<GameSession>) -> Redirect {
    session.reset();
    Redirect::to("/")
}

/// Redirects non-state-changing requests on mutating endpoints, with
/// no side effect.
async fn redirect_home() -> Redirect {
    Redirect::to("/")
}

/// JSON snapshot of the current game state.
#[instrument(skip(session))]
async fn state(State(session): State<GameSession>) -> Json<GameSnapshot> {
    Json(session.snapshot())
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
