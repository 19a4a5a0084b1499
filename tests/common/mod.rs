//! Shared fakes for exercising the pipeline and retention logic without a
//! network or a database.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use url::Url;

use newsreel::entities::AcceptedArticle;
use newsreel::feed::{Candidate, FeedError, FeedSource};
use newsreel::fetcher::{FetchError, Page, PageFetcher};
use newsreel::store::{ArticleStore, StoreError};

pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

/// Article-shaped HTML long enough to clear extraction thresholds.
pub fn article_html(sentences: usize) -> String {
    let body = "The quick brown fox jumped over the lazy dog near the riverbank today. "
        .repeat(sentences);
    format!(
        "<!DOCTYPE html><html><head><title>Fixture Story</title></head>\
         <body><article><h1>Fixture Story</h1><p>{body}</p></article></body></html>"
    )
}

// --- store -----------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct StoredRow {
    pub id: i64,
    pub url: String,
    pub scraped_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: Vec<StoredRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, url: &str, scraped_at: DateTime<Utc>) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.push(StoredRow {
            id,
            url: url.to_string(),
            scraped_at,
        });
    }

    pub fn urls(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .map(|r| r.url.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn list_urls(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self.urls().into_iter().collect())
    }

    async fn insert_batch(&self, articles: &[AcceptedArticle]) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let mut inserted = 0;
        for article in articles {
            // Duplicate urls are idempotent no-ops, like ON CONFLICT DO NOTHING.
            if inner.rows.iter().any(|r| r.url == article.url) {
                continue;
            }
            inner.next_id += 1;
            let id = inner.next_id;
            inner.rows.push(StoredRow {
                id,
                url: article.url.clone(),
                scraped_at: article.scraped_at,
            });
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn count_all(&self) -> Result<i64, StoreError> {
        Ok(self.count() as i64)
    }

    async fn delete_oldest(&self, n: i64) -> Result<u64, StoreError> {
        if n <= 0 {
            return Ok(0);
        }
        let mut inner = self.inner.lock().unwrap();
        let mut order: Vec<(DateTime<Utc>, i64)> =
            inner.rows.iter().map(|r| (r.scraped_at, r.id)).collect();
        order.sort();
        let doomed: HashSet<i64> = order
            .into_iter()
            .take(n as usize)
            .map(|(_, id)| id)
            .collect();
        let before = inner.rows.len();
        inner.rows.retain(|r| !doomed.contains(&r.id));
        Ok((before - inner.rows.len()) as u64)
    }
}

// --- fetcher ---------------------------------------------------------------

/// Serves canned HTML per URL and records which URLs were requested.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    pub hits: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn get(&self, url: &Url) -> Result<Page, FetchError> {
        self.hits.lock().unwrap().push(url.to_string());
        match self.pages.get(url.as_str()) {
            Some(body) => Ok(Page {
                url_final: url.clone(),
                status: reqwest::StatusCode::OK,
                body: body.clone(),
                fetched_at: Utc::now(),
            }),
            None => Err(FetchError::Http(reqwest::StatusCode::NOT_FOUND)),
        }
    }
}

// --- feed ------------------------------------------------------------------

pub struct StaticFeed {
    candidates: Vec<Candidate>,
}

impl StaticFeed {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    async fn search(&self, _topic: &str) -> Result<Vec<Candidate>, FeedError> {
        Ok(self.candidates.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

pub fn candidate(url: &str) -> Candidate {
    Candidate {
        url: Some(url.to_string()),
        title: Some("Fixture Story".to_string()),
        publisher: Some("Example News".to_string()),
        published_raw: Some("Tue, 05 Aug 2025 14:30:00 GMT".to_string()),
    }
}
