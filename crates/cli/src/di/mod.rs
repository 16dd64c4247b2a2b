use ferrule_api::AppState;
use ferrule_application::ports::{MarkupClassifier, PageAcquirer, ResultCache};
use ferrule_application::use_cases::{
    CheckEligibilityUseCase, GetCacheStatsUseCase, PurgeExpiredUseCase,
};
use ferrule_domain::Config;
use ferrule_infrastructure::{
    BrowserPool, CachedEligibilityResolver, EligibilityCache, OptScraper, PhraseClassifier,
};
use std::sync::Arc;
use std::time::Duration;

/// Wires infrastructure adapters into the use cases.
pub struct Services {
    pub check_eligibility: Arc<CheckEligibilityUseCase>,
    pub cache_stats: Arc<GetCacheStatsUseCase>,
    pub purge_expired: Arc<PurgeExpiredUseCase>,
}

impl Services {
    pub fn build(config: &Config) -> Self {
        let cache: Arc<dyn ResultCache> = Arc::new(EligibilityCache::new(Duration::from_secs(
            config.cache.ttl_secs,
        )));

        let pool = Arc::new(BrowserPool::new(config.scraper.clone()));
        let acquirer: Arc<dyn PageAcquirer> =
            Arc::new(OptScraper::new(config.scraper.clone(), pool));
        let classifier: Arc<dyn MarkupClassifier> = Arc::new(PhraseClassifier::new());

        let resolver = Arc::new(CachedEligibilityResolver::new(
            cache.clone(),
            acquirer,
            classifier,
        ));

        Self {
            check_eligibility: Arc::new(CheckEligibilityUseCase::new(resolver)),
            cache_stats: Arc::new(GetCacheStatsUseCase::new(cache.clone())),
            purge_expired: Arc::new(PurgeExpiredUseCase::new(cache)),
        }
    }

    pub fn api_state(&self) -> AppState {
        AppState {
            check_eligibility: self.check_eligibility.clone(),
            cache_stats: self.cache_stats.clone(),
        }
    }
}
