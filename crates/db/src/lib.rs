//! Document store layer.
//!
//! [`store::DocumentStore`] is the adapter every handler talks to;
//! [`postgres::PgDocumentStore`] keeps documents as JSONB rows and
//! [`memory::MemoryDocumentStore`] keeps them in process.
//! [`repositories::MediaRepo`] layers typed media records on top.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod postgres;
pub mod repositories;
pub mod store;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use store::{DocumentStore, StoreError, StoredDocument};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
