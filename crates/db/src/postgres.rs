//! PostgreSQL-backed document store.
//!
//! Every collection lives in the single `documents` table; the record itself
//! is the JSONB `body` column.

use async_trait::async_trait;
use mediahub_core::search::{DocumentFilter, SEARCH_TAGS_FIELD, SEARCH_TEXT_FIELDS};
use mediahub_core::types::{DbId, Timestamp};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

use crate::store::{check_document, DocumentStore, StoreError, StoredDocument};
use crate::DbPool;

/// Column list for `documents` queries.
const DOCUMENT_COLUMNS: &str = "id, body, created_at, updated_at";

/// A row from the `documents` table.
#[derive(Debug, FromRow)]
struct DocumentRow {
    id: DbId,
    body: Json<Value>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl From<DocumentRow> for StoredDocument {
    fn from(row: DocumentRow) -> Self {
        StoredDocument {
            id: row.id.to_string(),
            body: row.body.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// SQL predicate for [`DocumentFilter::Search`], reading the term from `$3`.
///
/// `strpos` on lowered operands gives a literal, case-insensitive substring
/// match. Absent or non-string fields yield NULL and never match.
fn search_predicate() -> String {
    let text = SEARCH_TEXT_FIELDS
        .iter()
        .map(|field| format!("strpos(lower(body ->> '{field}'), lower($3)) > 0"));

    let tags = format!(
        "EXISTS (SELECT 1 FROM jsonb_array_elements_text(\
             CASE WHEN jsonb_typeof(body -> '{SEARCH_TAGS_FIELD}') = 'array' \
                  THEN body -> '{SEARCH_TAGS_FIELD}' ELSE '[]'::jsonb END) AS tag \
         WHERE strpos(lower(tag), lower($3)) > 0)"
    );

    let clauses: Vec<String> = text.chain(std::iter::once(tags)).collect();
    format!("({})", clauses.join(" OR "))
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        check_document(&document)?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO documents (collection, body) VALUES ($1, $2) RETURNING id",
        )
        .bind(collection)
        .bind(Json(&document))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(collection, id, "Document inserted");
        Ok(id.to_string())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let predicate = match filter {
            DocumentFilter::All => "TRUE".to_string(),
            DocumentFilter::Search(_) => search_predicate(),
            DocumentFilter::TitleEquals(_) => "body ->> 'title' = $3".to_string(),
        };
        let query = format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents \
             WHERE collection = $1 AND {predicate} \
             ORDER BY id ASC \
             LIMIT $2"
        );

        let mut rows = sqlx::query_as::<_, DocumentRow>(&query)
            .bind(collection)
            .bind(limit);
        match filter {
            DocumentFilter::All => {}
            DocumentFilter::Search(term) => rows = rows.bind(term),
            DocumentFilter::TitleEquals(title) => rows = rows.bind(title),
        }

        let rows = rows.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(StoredDocument::from).collect())
    }

    async fn count(&self, collection: &str) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT collection FROM documents ORDER BY collection")
                .fetch_all(&self.pool)
                .await?;
        Ok(names)
    }

    async fn database_name(&self) -> Result<String, StoreError> {
        let name: String = sqlx::query_scalar("SELECT current_database()::text")
            .fetch_one(&self.pool)
            .await?;
        Ok(name)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_predicate_covers_every_field() {
        let predicate = search_predicate();
        for field in SEARCH_TEXT_FIELDS {
            assert!(
                predicate.contains(&format!("body ->> '{field}'")),
                "missing {field} in {predicate}"
            );
        }
        assert!(predicate.contains("jsonb_array_elements_text"));
        assert_eq!(predicate.matches(" OR ").count(), SEARCH_TEXT_FIELDS.len());
    }
}
