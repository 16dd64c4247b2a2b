use ferrule_application::use_cases::{CheckEligibilityUseCase, GetCacheStatsUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub check_eligibility: Arc<CheckEligibilityUseCase>,
    pub cache_stats: Arc<GetCacheStatsUseCase>,
}
