//! Root greeting and the store diagnostic report.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::response::MessageResponse;
use crate::state::AppState;

/// Collections listed by the diagnostic report.
const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Error messages in the report are cut to this many characters.
const MAX_ERROR_CHARS: usize = 80;

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "MediaHub backend ready",
    })
}

/// Store connectivity report returned by `GET /test`.
#[derive(Debug, Serialize)]
pub struct StoreReport {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: Option<String>,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// GET /test
///
/// Always answers `200`; store failures are described in the body.
pub async fn test_store(State(state): State<AppState>) -> Json<StoreReport> {
    let mut report = StoreReport {
        backend: "running",
        database: "not available".to_string(),
        database_url: if state.config.database_url.is_some() {
            "set"
        } else {
            "not set"
        },
        database_name: None,
        connection_status: "not connected",
        collections: Vec::new(),
    };

    match state.store.database_name().await {
        Ok(name) => {
            report.database_name = Some(name);
            report.database = "available".to_string();
            report.connection_status = "connected";
        }
        Err(err) => {
            tracing::warn!(error = %err, "Store diagnostic failed");
            report.database = format!("error: {}", truncate(&err.to_string()));
            report.connection_status = "error";
            return Json(report);
        }
    }

    match state.store.collection_names().await {
        Ok(names) => {
            report.collections = names.into_iter().take(MAX_REPORTED_COLLECTIONS).collect();
            report.database = "connected".to_string();
        }
        Err(err) => {
            tracing::warn!(error = %err, "Listing collections failed");
            report.database = format!("connected but error: {}", truncate(&err.to_string()));
        }
    }

    Json(report)
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
