pub mod client;
pub mod decode;
pub mod errors;
pub mod types;

pub use client::{USER_AGENT, fetch, get_client};
pub use errors::FetchError;
pub use types::Page;

use async_trait::async_trait;
use url::Url;

/// Seam between the pipeline and the network; tests swap in canned pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn get(&self, url: &Url) -> Result<Page, FetchError>;
}

/// Production fetcher backed by the shared reqwest client.
pub struct HttpFetcher;

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn get(&self, url: &Url) -> Result<Page, FetchError> {
        fetch(url).await
    }
}
