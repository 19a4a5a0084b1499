use url::Url;

use crate::filters::{EligibilityFilter, RejectReason};

/// Accepts a URL only when its host falls under one of the configured
/// domain suffixes (e.g. ".co.uk", "example.com").
pub struct DomainFilter {
    allowed: Vec<String>,
}

impl DomainFilter {
    pub fn new(allowed: Vec<String>) -> Self {
        let allowed = allowed
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { allowed }
    }

    fn host_allowed(&self, host: &str) -> bool {
        self.allowed.iter().any(|suffix| {
            let bare = suffix.strip_prefix('.').unwrap_or(suffix);
            host == bare || host.ends_with(&format!(".{bare}"))
        })
    }
}

impl EligibilityFilter for DomainFilter {
    fn name(&self) -> &'static str {
        "domain"
    }

    fn check(&self, url: &Url, _text: &str) -> Result<(), RejectReason> {
        let host = url.host_str().unwrap_or_default().to_lowercase();
        if self.host_allowed(&host) {
            Ok(())
        } else {
            Err(RejectReason::Domain { host })
        }
    }
}
