use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::handlers::diagnostics;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the document store is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = state.store.health_check().await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount root-level routes (not under `/api`).
///
/// ```text
/// GET /         -> root greeting
/// GET /health   -> health_check
/// GET /test     -> store diagnostic report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(diagnostics::root))
        .route("/health", get(health_check))
        .route("/test", get(diagnostics::test_store))
}
