use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::ResultCache;

/// Reclaims expired cache entries. Reads stay lazy, so this is the only
/// path that actually shrinks the store.
pub struct PurgeExpiredUseCase {
    cache: Arc<dyn ResultCache>,
}

impl PurgeExpiredUseCase {
    pub fn new(cache: Arc<dyn ResultCache>) -> Self {
        Self { cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> usize {
        let removed = self.cache.sweep();
        if removed > 0 {
            debug!(removed, "Expired cache entries purged");
        }
        removed
    }
}
