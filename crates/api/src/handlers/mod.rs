pub mod cache;
pub mod eligibility;
pub mod health;

pub use cache::get_cache_stats;
pub use eligibility::{get_eligibility, method_not_allowed, post_eligibility};
pub use health::health_check;
