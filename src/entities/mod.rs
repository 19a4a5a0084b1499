use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An article that survived the full acceptance pipeline and is ready to be
/// persisted. Immutable once stored; only retention eviction removes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedArticle {
    pub url: String,
    pub title: Option<String>,
    pub authors: String,
    pub published_at: Option<DateTime<Utc>>,
    pub summary: String,
    pub scraped_at: DateTime<Utc>,
}

/// Row shape of the `articles` table.
#[derive(Debug, Clone, FromRow)]
pub struct StoredArticle {
    pub id: i64,
    pub url: String,
    pub title: Option<String>,
    pub authors: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub summary: String,
    pub scraped_at: DateTime<Utc>,
}
