pub mod cache;
pub mod eligibility;

// Re-export use cases
pub use cache::{GetCacheStatsUseCase, PurgeExpiredUseCase};
pub use eligibility::CheckEligibilityUseCase;
