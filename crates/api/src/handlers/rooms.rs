//! Handlers for the room-analysis endpoints.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use roomlens_core::analysis::{
    self, AnalyzeRoomRequest, AnalyzeRoomResponse, DISCLAIMER,
};
use roomlens_db::repositories::AnalysisRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /api/analyze-room — run one analysis
// ---------------------------------------------------------------------------

/// Analyze a room photo and generate three renovation scenarios.
///
/// Validates the request, makes exactly one structured-generation call,
/// appends exactly one `analyses` row (room type + scenarios, never the
/// image), and returns the normalized scenario set with the disclaimer.
/// The generation and the insert are deliberately coupled: if the insert
/// fails, the already-generated result is discarded and a 500 returned.
pub async fn analyze_room(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRoomRequest>,
) -> AppResult<impl IntoResponse> {
    let valid = analysis::validate_request(&body)?;

    tracing::info!(
        image_size = valid.image_base64.len(),
        has_manual_type = valid.manual_room_type.is_some(),
        "Starting room analysis"
    );

    // Manual override wins; otherwise the demo default. Detection from the
    // image alone is delegated to the model and is unreliable on minimal
    // inputs, which is why the override exists.
    let effective = valid.manual_room_type.unwrap_or_default();

    let generated = state
        .generator
        .generate(&valid.image_base64, effective)
        .await?;

    tracing::info!(
        room_type = %effective,
        detected_room_type = %generated.room_type,
        scenario_count = generated.scenarios.len(),
        "Renovation scenarios generated"
    );

    // Malformed provider output is a server-side failure, never a 400.
    let scenarios = analysis::normalize_scenarios(generated.scenarios)
        .map_err(|e| AppError::InternalError(format!("model output failed validation: {e}")))?;

    let scenarios_json = serde_json::to_value(&scenarios)
        .map_err(|e| AppError::InternalError(format!("failed to serialize scenarios: {e}")))?;

    let record = AnalysisRepo::insert(&state.pool, effective.as_str(), &scenarios_json).await?;

    tracing::info!(analysis_id = %record.id, room_type = %effective, "Analysis stored");

    Ok(Json(AnalyzeRoomResponse {
        room_type: effective,
        scenarios,
        disclaimer: DISCLAIMER.to_string(),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/analyses — recent analysis records
// ---------------------------------------------------------------------------

/// Query parameters for the analysis history endpoint.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

const DEFAULT_HISTORY_LIMIT: i64 = 20;
const MAX_HISTORY_LIMIT: i64 = 100;

/// List recent analyses, newest first. Records carry the room type and
/// scenario payload only; no image was ever stored.
pub async fn list_analyses(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT);

    let analyses = AnalysisRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(analyses))
}
