use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::entities::{AcceptedArticle, StoredArticle};
use crate::store::{ArticleStore, StoreError};

pub struct PgArticleStore {
    pool: PgPool,
}

impl PgArticleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Read side of the window: the most recently scraped articles,
    /// newest first.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<StoredArticle>, StoreError> {
        let rows = sqlx::query_as::<_, StoredArticle>(
            "SELECT id, url, title, authors, published_at, summary, scraped_at
             FROM articles ORDER BY scraped_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn list_urls(&self) -> Result<HashSet<String>, StoreError> {
        let urls: Vec<String> = sqlx::query_scalar("SELECT url FROM articles")
            .fetch_all(&self.pool)
            .await?;
        Ok(urls.into_iter().collect())
    }

    #[instrument(skip_all, fields(batch = articles.len()))]
    async fn insert_batch(&self, articles: &[AcceptedArticle]) -> Result<u64, StoreError> {
        let mut inserted = 0u64;
        for article in articles {
            let rows = sqlx::query(
                "INSERT INTO articles (url, title, authors, published_at, summary, scraped_at)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 ON CONFLICT (url) DO NOTHING",
            )
            .bind(&article.url)
            .bind(&article.title)
            .bind(&article.authors)
            .bind(article.published_at)
            .bind(&article.summary)
            .bind(article.scraped_at)
            .execute(&self.pool)
            .await?
            .rows_affected();

            if rows == 0 {
                // A concurrent run got there first; the unique url
                // constraint makes this benign.
                debug!(url = %article.url, "url already present, insert skipped");
            }
            inserted += rows;
        }
        Ok(inserted)
    }

    async fn count_all(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn delete_oldest(&self, n: i64) -> Result<u64, StoreError> {
        if n <= 0 {
            return Ok(0);
        }
        let deleted = sqlx::query(
            "DELETE FROM articles WHERE id IN (
                 SELECT id FROM articles ORDER BY scraped_at ASC, id ASC LIMIT $1
             )",
        )
        .bind(n)
        .execute(&self.pool)
        .await?
        .rows_affected();
        Ok(deleted)
    }
}
