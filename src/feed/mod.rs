//! Article discovery. A `FeedSource` returns an ordered, finite batch of
//! candidates per run; feed order is relevance/recency order and is
//! preserved into the pipeline.

pub mod google_news;

pub use google_news::GoogleNewsFeed;

use async_trait::async_trait;
use thiserror::Error;

/// A discovered link, proposed for one pipeline pass and then discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub url: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub published_raw: Option<String>,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed url invalid: {0}")]
    Url(#[from] url::ParseError),

    #[error("feed xml malformed: {0}")]
    Xml(#[from] quick_xml::DeError),
}

#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn search(&self, topic: &str) -> Result<Vec<Candidate>, FeedError>;
    fn name(&self) -> &'static str;
}
