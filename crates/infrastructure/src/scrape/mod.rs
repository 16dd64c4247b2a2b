pub mod acquirer;
pub mod browser;
pub mod classifier;

pub use acquirer::OptScraper;
pub use browser::{BrowserPool, ScrapeSession};
pub use classifier::PhraseClassifier;
