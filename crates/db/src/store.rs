//! The document store adapter trait and its shared types.

use async_trait::async_trait;
use mediahub_core::media::{contains_nul, Persisted};
use mediahub_core::search::DocumentFilter;
use mediahub_core::types::Timestamp;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Failure inside a document store. Always surfaced to clients as a 500.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Reject bodies that no backend can hold: anything but a JSON object, and
/// strings carrying NUL (refused by PostgreSQL `jsonb`).
pub(crate) fn check_document(document: &Value) -> Result<(), StoreError> {
    if !document.is_object() {
        return Err(StoreError::InvalidDocument(
            "document body must be a JSON object".into(),
        ));
    }
    if contains_nul(document) {
        return Err(StoreError::InvalidDocument(
            "document strings must not contain NUL characters".into(),
        ));
    }
    Ok(())
}

/// A raw document with its store-assigned identifier and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub body: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StoredDocument {
    /// Decode the body into a typed record, keeping id and timestamps.
    pub fn into_persisted<T: DeserializeOwned>(self) -> Result<Persisted<T>, StoreError> {
        Ok(Persisted {
            id: self.id,
            record: serde_json::from_value(self.body)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Minimal document store: insert one, find many.
///
/// A single instance is built at startup and shared by every request;
/// implementations must be safe to call concurrently.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a JSON object into `collection`, returning the new identifier.
    async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError>;

    /// Return up to `limit` documents of `collection` matching `filter`,
    /// oldest first.
    async fn find(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    /// Number of documents in `collection`.
    async fn count(&self, collection: &str) -> Result<i64, StoreError>;

    /// Names of all non-empty collections, sorted.
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;

    /// Name of the underlying database.
    async fn database_name(&self) -> Result<String, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
