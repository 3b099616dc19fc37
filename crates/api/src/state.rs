use std::sync::Arc;

use mediahub_db::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store, built once at startup.
    pub store: Arc<dyn DocumentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
