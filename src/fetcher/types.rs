use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// A fetched page, body already decoded to UTF-8.
#[derive(Debug, Clone)]
pub struct Page {
    pub url_final: Url,
    pub status: StatusCode,
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}
