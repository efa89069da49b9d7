//! Entity model for the `analyses` table.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One completed room analysis: effective room type plus the generated
/// scenario set as an opaque JSON blob. Rows are never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub id: Uuid,
    pub room_type: String,
    pub scenarios: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
