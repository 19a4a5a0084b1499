//! Google News RSS search client.

use std::time::Duration;

use async_trait::async_trait;
use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use crate::feed::{Candidate, FeedError, FeedSource};
use crate::fetcher::USER_AGENT;

const SEARCH_ENDPOINT: &str = "https://news.google.com/rss/search";

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    source: Option<SourceTag>,
}

#[derive(Debug, Deserialize)]
struct SourceTag {
    #[serde(rename = "$text")]
    name: Option<String>,
}

pub struct GoogleNewsFeed {
    client: reqwest::Client,
    lang: String,
}

impl GoogleNewsFeed {
    pub fn new(lang: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build feed HTTP client");
        Self {
            client,
            lang: lang.into(),
        }
    }

    fn search_url(&self, topic: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(SEARCH_ENDPOINT, &[("q", topic), ("hl", self.lang.as_str())])
    }

    fn parse_feed(xml: &str) -> Result<Vec<Candidate>, FeedError> {
        let rss: Rss = from_str(xml)?;
        let candidates = rss
            .channel
            .items
            .into_iter()
            .map(|item| Candidate {
                url: item
                    .link
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty()),
                title: item.title.map(|t| t.trim().to_string()),
                publisher: item.source.and_then(|s| s.name),
                published_raw: item.pub_date,
            })
            .collect();
        Ok(candidates)
    }
}

#[async_trait]
impl FeedSource for GoogleNewsFeed {
    #[instrument(skip(self), fields(feed = self.name()))]
    async fn search(&self, topic: &str) -> Result<Vec<Candidate>, FeedError> {
        let url = self.search_url(topic)?;
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Self::parse_feed(&body)
    }

    fn name(&self) -> &'static str {
        "google-news"
    }
}
