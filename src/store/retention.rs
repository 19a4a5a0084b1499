//! Fixed-capacity retention: two eviction phases per run.
//!
//! Phase one evicts exactly as many oldest rows as the incoming batch holds,
//! before the insert. Phase two, after the insert, trims whatever still
//! exceeds the cap. Both phases delete in `scraped_at` order, oldest first,
//! so the window always drops its least recent entries.

use tracing::info;

use crate::store::{ArticleStore, StoreError};

pub struct RetentionManager<'a> {
    store: &'a dyn ArticleStore,
    max_capacity: i64,
}

impl<'a> RetentionManager<'a> {
    pub fn new(store: &'a dyn ArticleStore, max_capacity: i64) -> Self {
        Self {
            store,
            max_capacity,
        }
    }

    /// Evict one oldest row per incoming article. Keyed to the batch size,
    /// not to the current overflow.
    pub async fn make_room(&self, incoming: usize) -> Result<u64, StoreError> {
        let evicted = self.store.delete_oldest(incoming as i64).await?;
        if evicted > 0 {
            info!(evicted, incoming, "evicted oldest articles to make room");
        }
        Ok(evicted)
    }

    /// Trim anything still past the cap after an insert.
    pub async fn trim_overflow(&self) -> Result<u64, StoreError> {
        let total = self.store.count_all().await?;
        let overflow = total - self.max_capacity;
        if overflow <= 0 {
            return Ok(0);
        }
        let evicted = self.store.delete_oldest(overflow).await?;
        info!(evicted, total, cap = self.max_capacity, "trimmed overflow");
        Ok(evicted)
    }
}
