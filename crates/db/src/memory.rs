//! In-process document store.
//!
//! Used when no `DATABASE_URL` is configured and by the HTTP test suite.
//! Documents live in a map of collection name to insertion-ordered vectors
//! behind a single `RwLock`; nothing survives a restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use mediahub_core::search::DocumentFilter;
use mediahub_core::types::DbId;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::store::{check_document, DocumentStore, StoreError, StoredDocument};

const DATABASE_NAME: &str = "memory";

#[derive(Default)]
struct MemoryState {
    last_id: DbId,
    collections: BTreeMap<String, Vec<StoredDocument>>,
}

#[derive(Default)]
pub struct MemoryDocumentStore {
    state: RwLock<MemoryState>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        check_document(&document)?;

        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = state.last_id.to_string();
        let now = Utc::now();

        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.clone(),
                body: document,
                created_at: now,
                updated_at: now,
            });

        tracing::debug!(collection, id = %id, "Document inserted");
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let state = self.state.read().await;
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

        Ok(state
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(&doc.body))
                    .take(take)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count(&self, collection: &str) -> Result<i64, StoreError> {
        let state = self.state.read().await;
        let len = state.collections.get(collection).map_or(0, Vec::len);
        Ok(i64::try_from(len).unwrap_or(i64::MAX))
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }

    async fn database_name(&self) -> Result<String, StoreError> {
        Ok(DATABASE_NAME.to_string())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
