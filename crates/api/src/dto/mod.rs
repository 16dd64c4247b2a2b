pub mod cache;
pub mod eligibility;
pub mod health;

pub use cache::CacheStatsResponse;
pub use eligibility::{CheckRequest, EligibilityQuery, EligibilityResponse, ErrorResponse};
pub use health::HealthResponse;
