//! Eligibility filtering: an ordered AND-chain of independent predicates over
//! a candidate's URL and extracted text. The first failure short-circuits the
//! rest. Which filters participate is decided by `PipelineConfig`, not here.

pub mod domain;
pub mod language;
pub mod length;
pub mod paywall;

pub use domain::DomainFilter;
pub use language::LanguageFilter;
pub use length::MinLengthFilter;
pub use paywall::{PaywallFilter, default_paywall_markers};

use thiserror::Error;
use url::Url;

use crate::config::PipelineConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectReason {
    #[error("host '{host}' not in domain allow-list")]
    Domain { host: String },

    #[error("paywall marker '{marker}' present")]
    Paywall { marker: String },

    #[error("language mismatch (detected {detected:?})")]
    Language { detected: Option<String> },

    #[error("text too short to summarize ({len} chars, minimum {min})")]
    TooShort { len: usize, min: usize },
}

/// A rejection annotated with the filter that produced it, for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub filter: &'static str,
    pub reason: RejectReason,
}

pub trait EligibilityFilter: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, url: &Url, text: &str) -> Result<(), RejectReason>;
}

pub struct FilterChain {
    filters: Vec<Box<dyn EligibilityFilter>>,
}

impl FilterChain {
    /// Assemble the chain a configuration asks for: domain, paywall,
    /// language, then the stricter length gate. Absent config fields mean
    /// the corresponding filter is not installed at all.
    pub fn from_config(cfg: &PipelineConfig) -> Self {
        let mut filters: Vec<Box<dyn EligibilityFilter>> = Vec::new();

        if let Some(domains) = &cfg.domain_allow_list {
            if !domains.is_empty() {
                filters.push(Box::new(DomainFilter::new(domains.clone())));
            }
        }
        filters.push(Box::new(PaywallFilter::new(cfg.paywall_markers.clone())));
        if let Some(target) = &cfg.language_target {
            filters.push(Box::new(LanguageFilter::new(target.clone())));
        }
        if let Some(min) = cfg.min_substantive_len {
            filters.push(Box::new(MinLengthFilter::new(min)));
        }

        Self { filters }
    }

    pub fn check(&self, url: &Url, text: &str) -> Result<(), Rejection> {
        for filter in &self.filters {
            if let Err(reason) = filter.check(url, text) {
                return Err(Rejection {
                    filter: filter.name(),
                    reason,
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
