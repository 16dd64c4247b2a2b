//! Ferrule Application Layer
//!
//! Use cases and the ports they depend on. Infrastructure adapters
//! implement the ports; this crate never touches a browser or a socket.

pub mod ports;
pub mod use_cases;

pub use ports::{
    CacheStats, EligibilityResolver, MarkupClassifier, PageAcquirer, Resolution, ResultCache,
};
pub use use_cases::{CheckEligibilityUseCase, GetCacheStatsUseCase, PurgeExpiredUseCase};
