use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use roomlens_core::error::CoreError;
use roomlens_core::generator::GeneratorError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ "error": ... }` JSON body
/// the mobile client parses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roomlens-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure from the scenario generator (provider call or its output).
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // Provider failures surface with their best-effort message;
            // the client displays it verbatim when parseable.
            AppError::Generator(err) => {
                tracing::error!(error = %err, "Scenario generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_ERROR",
                    err.to_string(),
                )
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
