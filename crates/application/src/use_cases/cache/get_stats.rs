use std::sync::Arc;

use crate::ports::{CacheStats, ResultCache};

pub struct GetCacheStatsUseCase {
    cache: Arc<dyn ResultCache>,
}

impl GetCacheStatsUseCase {
    pub fn new(cache: Arc<dyn ResultCache>) -> Self {
        Self { cache }
    }

    pub async fn execute(&self) -> CacheStats {
        self.cache.stats()
    }
}
