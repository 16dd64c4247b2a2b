use serde::{Deserialize, Serialize};

/// Result cache tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How long a stored report stays fresh, in seconds.
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,

    /// Interval between background sweeps of expired entries, in seconds.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

fn default_ttl() -> u64 {
    86_400
}

fn default_sweep_interval() -> u64 {
    3_600
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}
