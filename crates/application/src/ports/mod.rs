pub mod acquirer;
pub mod cache;
pub mod classifier;
pub mod resolver;

pub use acquirer::PageAcquirer;
pub use cache::{CacheStats, ResultCache};
pub use classifier::MarkupClassifier;
pub use resolver::{EligibilityResolver, Resolution};
