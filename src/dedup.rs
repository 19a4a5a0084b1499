//! URL-level deduplication against the set of already-stored articles.
//!
//! The store's URL set is snapshotted once at the start of a run; the same
//! set then also claims URLs seen during the run, so a link appearing twice
//! in one feed page is only processed once. Rejection happens before any
//! fetch is attempted.

use std::collections::HashSet;

pub struct Deduplicator {
    seen: HashSet<String>,
}

impl Deduplicator {
    pub fn new(existing: HashSet<String>) -> Self {
        Self { seen: existing }
    }

    /// Returns true exactly once per URL; the URL is claimed on first sight.
    pub fn is_new(&mut self, url: &str) -> bool {
        self.seen.insert(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_already_stored_urls() {
        let existing: HashSet<String> = ["https://example.com/a".to_string()].into();
        let mut dedup = Deduplicator::new(existing);
        assert!(!dedup.is_new("https://example.com/a"));
        assert!(dedup.is_new("https://example.com/b"));
    }

    #[test]
    fn claims_urls_within_a_run() {
        let mut dedup = Deduplicator::new(HashSet::new());
        assert!(dedup.is_new("https://example.com/x"));
        assert!(!dedup.is_new("https://example.com/x"));
    }
}
