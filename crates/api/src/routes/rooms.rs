//! Route definitions for room analysis.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// Room analysis routes mounted at `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze-room", post(rooms::analyze_room))
        .route("/analyses", get(rooms::list_analyses))
}
