use std::time::Duration;

use chrono::Utc;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use tracing::instrument;
use url::Url;

use crate::fetcher::{decode::decode_body, errors::FetchError, types::Page};

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024;
pub const USER_AGENT: &str = "newsreel/0.1 (+https://github.com/newsreel/newsreel)";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(10))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("Failed to build HTTP client")
});

pub fn get_client() -> &'static Client {
    &HTTP_CLIENT
}

/// Fetch a candidate page. One attempt; every failure mode maps to a
/// `FetchError` the pipeline logs and skips on.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &Url) -> Result<Page, FetchError> {
    let response = HTTP_CLIENT
        .get(url.clone())
        .send()
        .await
        .map_err(FetchError::from_reqwest)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http(status));
    }

    if let Some(length) = response.content_length() {
        if length > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(length));
        }
    }

    let url_final = response.url().clone();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
        return Err(FetchError::UnsupportedContentType(content_type));
    }

    let body_bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    // Content-Length may have been absent; re-check after download.
    if body_bytes.len() as u64 > MAX_BODY_SIZE {
        return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
    }

    Ok(Page {
        url_final,
        status,
        body: decode_body(&content_type, &body_bytes),
        fetched_at: Utc::now(),
    })
}
