//! Repository for the `analyses` table.
//!
//! The table is append-only: one insert per successful analysis, no
//! update or delete paths.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::analysis::Analysis;

/// Column list for `analyses` SELECT/RETURNING clauses.
const COLUMNS: &str = "id, room_type, scenarios, created_at";

pub struct AnalysisRepo;

impl AnalysisRepo {
    /// Append one analysis record. `scenarios` is the already-normalized
    /// scenario array; the source image is never persisted.
    pub async fn insert(
        pool: &PgPool,
        room_type: &str,
        scenarios: &serde_json::Value,
    ) -> Result<Analysis, sqlx::Error> {
        let query = format!(
            "INSERT INTO analyses (room_type, scenarios) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Analysis>(&query)
            .bind(room_type)
            .bind(scenarios)
            .fetch_one(pool)
            .await
    }

    /// Fetch a single record by id.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Analysis>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM analyses WHERE id = $1");
        sqlx::query_as::<_, Analysis>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the most recent analyses, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Analysis>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM analyses \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, Analysis>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Total number of stored analyses. Used by tests to assert the
    /// append-exactly-once behaviour.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM analyses")
            .fetch_one(pool)
            .await
    }
}
