//! Typed access to the four media collections.

use mediahub_core::media::{MediaRecord, Persisted};
use mediahub_core::search::{clamp_limit, DocumentFilter, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

use crate::store::{DocumentStore, StoreError, StoredDocument};

/// Provides create/list/search over media records of any [`MediaRecord`] kind.
pub struct MediaRepo;

impl MediaRepo {
    /// Store an already-validated record, returning its new identifier.
    pub async fn create<T: MediaRecord>(
        store: &dyn DocumentStore,
        record: &T,
    ) -> Result<String, StoreError> {
        let body = serde_json::to_value(record)?;
        store.insert(T::KIND.collection(), body).await
    }

    /// List records, optionally narrowed by a free-text term.
    ///
    /// `limit` defaults to [`DEFAULT_LIST_LIMIT`] and is clamped to
    /// `1..=MAX_LIST_LIMIT`. Results come back in insertion order.
    pub async fn list<T: MediaRecord>(
        store: &dyn DocumentStore,
        q: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<Persisted<T>>, StoreError> {
        let filter = DocumentFilter::from_query(q);
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

        store
            .find(T::KIND.collection(), &filter, limit)
            .await?
            .into_iter()
            .map(StoredDocument::into_persisted)
            .collect()
    }

    /// Find the first record whose title equals `title` exactly.
    pub async fn find_by_title<T: MediaRecord>(
        store: &dyn DocumentStore,
        title: &str,
    ) -> Result<Option<Persisted<T>>, StoreError> {
        let filter = DocumentFilter::TitleEquals(title.to_string());
        store
            .find(T::KIND.collection(), &filter, 1)
            .await?
            .into_iter()
            .next()
            .map(StoredDocument::into_persisted)
            .transpose()
    }
}
