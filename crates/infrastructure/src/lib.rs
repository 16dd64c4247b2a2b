//! Ferrule Infrastructure Layer
//!
//! Concrete adapters behind the application ports: the in-memory result
//! cache, the Chromium-backed page acquirer, the markup classifier, and
//! the caching resolver that ties them together.

pub mod cache;
pub mod resolver;
pub mod scrape;

pub use cache::EligibilityCache;
pub use resolver::CachedEligibilityResolver;
pub use scrape::{BrowserPool, OptScraper, PhraseClassifier};
