//! The acceptance pipeline: decides, per discovered candidate, whether it
//! becomes a stored article. Candidates are processed strictly one at a
//! time in feed order; a failing candidate is logged and skipped, never
//! allowed to abort the run.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::{Config, PipelineConfig};
use crate::dates;
use crate::dedup::Deduplicator;
use crate::entities::AcceptedArticle;
use crate::extractor;
use crate::feed::{Candidate, FeedSource};
use crate::fetcher::PageFetcher;
use crate::filters::FilterChain;
use crate::store::{ArticleStore, RetentionManager};

/// Per-run outcome counters, logged at run end.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunReport {
    pub examined: usize,
    pub no_url: usize,
    pub duplicate: usize,
    pub fetch_failed: usize,
    pub unusable: usize,
    pub rejected: usize,
    pub accepted: usize,
    pub inserted: u64,
    pub evicted: u64,
}

pub struct AcceptancePipeline<'a> {
    fetcher: &'a dyn PageFetcher,
    filters: FilterChain,
    cfg: &'a PipelineConfig,
}

impl<'a> AcceptancePipeline<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, cfg: &'a PipelineConfig) -> Self {
        Self {
            fetcher,
            filters: FilterChain::from_config(cfg),
            cfg,
        }
    }

    /// Run every candidate through dedup, fetch, extraction and the filter
    /// chain. Returns accepted articles in feed order plus the counters.
    pub async fn run(
        &self,
        candidates: Vec<Candidate>,
        existing_urls: HashSet<String>,
    ) -> (Vec<AcceptedArticle>, RunReport) {
        let mut report = RunReport::default();
        let mut dedup = Deduplicator::new(existing_urls);
        let mut accepted = Vec::new();

        for candidate in candidates {
            report.examined += 1;

            let Some(raw_url) = candidate.url.clone().filter(|u| !u.is_empty()) else {
                debug!("candidate without url, skipping");
                report.no_url += 1;
                continue;
            };

            // Dedup before fetch: stored URLs and in-run repeats never cost
            // a network round trip.
            if !dedup.is_new(&raw_url) {
                debug!(url = %raw_url, "already stored, skipping");
                report.duplicate += 1;
                continue;
            }

            let url = match Url::parse(&raw_url) {
                Ok(url) => url,
                Err(err) => {
                    warn!(url = %raw_url, error = %err, "unparseable candidate url, skipping");
                    report.fetch_failed += 1;
                    continue;
                }
            };

            let page = match self.fetcher.get(&url).await {
                Ok(page) => page,
                Err(err) => {
                    warn!(url = %url, error = %err, "fetch failed, skipping");
                    report.fetch_failed += 1;
                    continue;
                }
            };

            let extraction = match extractor::extract(&page.body, &page.url_final, self.cfg) {
                Ok(extraction) => extraction,
                Err(cause) => {
                    info!(url = %url, %cause, "content unusable, skipping");
                    report.unusable += 1;
                    continue;
                }
            };

            if let Err(rejection) = self.filters.check(&url, &extraction.text) {
                info!(
                    url = %url,
                    filter = rejection.filter,
                    reason = %rejection.reason,
                    "rejected by eligibility filter"
                );
                report.rejected += 1;
                continue;
            }

            // Unparseable publication dates degrade to None; the article is
            // kept either way.
            let published_at = candidate
                .published_raw
                .as_deref()
                .and_then(dates::parse_lenient);

            accepted.push(AcceptedArticle {
                url: raw_url,
                title: candidate.title.or(extraction.title),
                authors: candidate
                    .publisher
                    .unwrap_or_else(|| "Unknown".to_string()),
                published_at,
                summary: extraction.summary,
                scraped_at: Utc::now(),
            });
            report.accepted += 1;
        }

        (accepted, report)
    }
}

/// One full scrape cycle: snapshot stored URLs, query the feed, run the
/// acceptance pipeline, then apply both retention phases around the insert.
#[instrument(skip_all, fields(topic = %config.topic()))]
pub async fn run_once(
    config: &Config,
    feed: &dyn FeedSource,
    fetcher: &dyn PageFetcher,
    store: &dyn ArticleStore,
) -> anyhow::Result<RunReport> {
    info!(feed = feed.name(), "scrape run starting");

    let existing = store.list_urls().await?;
    let mut candidates = feed.search(config.topic()).await?;
    candidates.truncate(config.num_candidates());

    let pipeline = AcceptancePipeline::new(fetcher, config.pipeline());
    let (accepted, mut report) = pipeline.run(candidates, existing).await;

    if !accepted.is_empty() {
        let retention = RetentionManager::new(store, config.max_articles());
        report.evicted += retention.make_room(accepted.len()).await?;
        report.inserted = store.insert_batch(&accepted).await?;
        report.evicted += retention.trim_overflow().await?;
    }

    info!(
        examined = report.examined,
        accepted = report.accepted,
        inserted = report.inserted,
        evicted = report.evicted,
        duplicate = report.duplicate,
        fetch_failed = report.fetch_failed,
        unusable = report.unusable,
        rejected = report.rejected,
        "scrape run finished"
    );
    Ok(report)
}
