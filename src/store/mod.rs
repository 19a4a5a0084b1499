//! Persistence of the rolling article window.
//!
//! `ArticleStore` is the seam the pipeline and retention logic run against;
//! `PgArticleStore` is the production Postgres implementation and the tests
//! substitute an in-memory fake.

pub mod postgres;
pub mod retention;

pub use postgres::PgArticleStore;
pub use retention::RetentionManager;

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::AcceptedArticle;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Snapshot of every stored URL, loaded once per run.
    async fn list_urls(&self) -> Result<HashSet<String>, StoreError>;

    /// Insert a batch; rows whose URL is already present are idempotent
    /// no-ops. Returns the number of rows actually inserted.
    async fn insert_batch(&self, articles: &[AcceptedArticle]) -> Result<u64, StoreError>;

    async fn count_all(&self) -> Result<i64, StoreError>;

    /// Delete the `n` oldest rows by `scraped_at` (insertion order breaks
    /// ties). `n <= 0` is a no-op. Returns the number deleted.
    async fn delete_oldest(&self, n: i64) -> Result<u64, StoreError>;
}
