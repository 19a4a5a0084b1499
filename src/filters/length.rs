use url::Url;

use crate::filters::{EligibilityFilter, RejectReason};

/// The stricter downstream length gate, distinct from the extractor's
/// "usable at all" threshold.
pub struct MinLengthFilter {
    min: usize,
}

impl MinLengthFilter {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl EligibilityFilter for MinLengthFilter {
    fn name(&self) -> &'static str {
        "min-length"
    }

    fn check(&self, _url: &Url, text: &str) -> Result<(), RejectReason> {
        let len = text.chars().count();
        if len < self.min {
            Err(RejectReason::TooShort { len, min: self.min })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        let filter = MinLengthFilter::new(10);
        let url = Url::parse("https://example.com").unwrap();
        assert!(filter.check(&url, &"a".repeat(10)).is_ok());
        assert!(filter.check(&url, &"a".repeat(9)).is_err());
    }
}
