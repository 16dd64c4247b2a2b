use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::scraper::ScraperConfig;
use super::server::ServerConfig;

/// Top-level configuration, assembled from an optional TOML file with
/// per-section defaults and CLI overrides applied on top.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub scraper: ScraperConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
}

impl Config {
    /// Load configuration from `path` when given, otherwise start from
    /// defaults, then apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|source| ConfigError::Io {
                    path: p.to_string(),
                    source,
                })?;
                toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: p.to_string(),
                    source,
                })?
            }
            None => Self::default(),
        };

        if let Some(port) = overrides.port {
            config.server.port = port;
        }

        Ok(config)
    }

    /// Reject configurations that would make the service misbehave at
    /// runtime rather than fail at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scraper.target_url.is_empty() {
            return Err(ConfigError::Invalid(
                "scraper.target_url must not be empty".to_string(),
            ));
        }
        if self.scraper.page_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "scraper.page_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.scraper.max_sessions == 0 {
            return Err(ConfigError::Invalid(
                "scraper.max_sessions must be greater than zero".to_string(),
            ));
        }
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "cache.ttl_secs must be greater than zero".to_string(),
            ));
        }
        if self.cache.sweep_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "cache.sweep_interval_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
