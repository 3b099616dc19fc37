#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use mediahub_core::search::DocumentFilter;
use mediahub_db::{DocumentStore, MemoryDocumentStore, StoreError, StoredDocument};
use serde_json::Value;
use tower::ServiceExt;

use mediahub_api::config::ServerConfig;
use mediahub_api::router::build_app_router;
use mediahub_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the permissive `*` CORS policy (matching the default) and a
/// 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        db_max_connections: 1,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router around `store`.
///
/// Goes through `build_app_router`, so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) as production.
pub fn build_app_with(store: Arc<dyn DocumentStore>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the app on a fresh in-memory store, returning the store as well so
/// tests can inspect what was persisted.
pub fn build_test_app() -> (Router, Arc<MemoryDocumentStore>) {
    let store = Arc::new(MemoryDocumentStore::new());
    let app = build_app_with(store.clone(), test_config());
    (app, store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_empty(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose every call fails, standing in for a lost database connection.
pub struct UnavailableStore;

const UNAVAILABLE: &str = "connection refused (os error 111)";

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn insert(&self, _collection: &str, _document: Value) -> Result<String, StoreError> {
        Err(StoreError::Unavailable(UNAVAILABLE.into()))
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: &DocumentFilter,
        _limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        Err(StoreError::Unavailable(UNAVAILABLE.into()))
    }

    async fn count(&self, _collection: &str) -> Result<i64, StoreError> {
        Err(StoreError::Unavailable(UNAVAILABLE.into()))
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable(UNAVAILABLE.into()))
    }

    async fn database_name(&self) -> Result<String, StoreError> {
        Err(StoreError::Unavailable(UNAVAILABLE.into()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(UNAVAILABLE.into()))
    }
}

pub fn build_unavailable_app() -> Router {
    build_app_with(Arc::new(UnavailableStore), test_config())
}
