use ferrule_application::CacheStats;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CacheStatsResponse {
    pub entries: usize,
    pub ttl_secs: u64,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub expired_evictions: u64,
    pub sweeps: u64,
    pub hit_rate: f64,
}

impl CacheStatsResponse {
    pub fn from_stats(stats: CacheStats) -> Self {
        Self {
            entries: stats.entries,
            ttl_secs: stats.ttl_secs,
            hits: stats.hits,
            misses: stats.misses,
            insertions: stats.insertions,
            expired_evictions: stats.expired_evictions,
            sweeps: stats.sweeps,
            hit_rate: stats.hit_rate,
        }
    }
}
