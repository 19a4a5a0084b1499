use url::Url;

use crate::filters::{EligibilityFilter, RejectReason};

/// Coarse keyword heuristic for subscription walls. Both false positives and
/// false negatives happen; the marker list is configuration.
pub struct PaywallFilter {
    markers: Vec<String>,
}

pub fn default_paywall_markers() -> Vec<String> {
    vec!["subscribe".to_string(), "sign in".to_string()]
}

impl PaywallFilter {
    pub fn new(markers: Vec<String>) -> Self {
        let markers = markers.into_iter().map(|m| m.to_lowercase()).collect();
        Self { markers }
    }
}

impl EligibilityFilter for PaywallFilter {
    fn name(&self) -> &'static str {
        "paywall"
    }

    fn check(&self, _url: &Url, text: &str) -> Result<(), RejectReason> {
        let lower = text.to_lowercase();
        match self.markers.iter().find(|m| lower.contains(m.as_str())) {
            Some(marker) => Err(RejectReason::Paywall {
                marker: marker.clone(),
            }),
            None => Ok(()),
        }
    }
}
