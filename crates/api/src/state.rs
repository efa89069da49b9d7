use std::sync::Arc;

use roomlens_core::generator::ScenarioGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc`). The generator is a
/// trait object so tests can swap the Gemini client for a mock.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: roomlens_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Structured scenario generator (Gemini in production).
    pub generator: Arc<dyn ScenarioGenerator>,
}
