use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mediahub_core::error::CoreError;
use mediahub_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for document
/// store failures. Implements [`IntoResponse`] to produce consistent JSON
/// error responses of the form `{ "error", "code" }`, plus `details` for
/// field-level validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mediahub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A document store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details = None;

        let (status, code, message) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", msg)
                }
                CoreError::InvalidFields(fields) => {
                    let message = format!("{} field(s) failed validation", fields.len());
                    details = Some(fields);
                    (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", message)
                }
            },

            // --- Store errors (message passed through) ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Document store error");
                (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR", err.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        };

        let body = match details {
            Some(fields) => json!({
                "error": message,
                "code": code,
                "details": fields,
            }),
            None => json!({
                "error": message,
                "code": code,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}
