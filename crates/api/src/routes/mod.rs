pub mod health;
pub mod rooms;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST /api/analyze-room   -> analyze_room
/// GET  /api/analyses       -> list_analyses
/// ```
pub fn api_routes() -> Router<AppState> {
    rooms::router()
}
