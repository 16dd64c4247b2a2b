//! Configuration module for Ferrule
//!
//! Configuration structures organized by concern:
//! - `root`: main configuration and CLI overrides
//! - `server`: HTTP port and binding
//! - `scraper`: external form interaction settings
//! - `cache`: result cache TTL and sweep cadence
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;
pub mod scraper;
pub mod server;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use scraper::ScraperConfig;
pub use server::ServerConfig;
