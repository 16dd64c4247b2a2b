use ferrule_domain::{EligibilityReport, PhoneNumber};

/// Point-in-time counters exposed by the result cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheStats {
    pub entries: usize,
    pub ttl_secs: u64,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub expired_evictions: u64,
    pub sweeps: u64,
    pub hit_rate: f64,
}

/// TTL-bounded store of eligibility reports keyed by normalized number.
///
/// `get` must treat an entry whose deadline has passed as absent without
/// mutating the store; reclamation happens in `sweep`.
pub trait ResultCache: Send + Sync {
    fn get(&self, phone: &PhoneNumber) -> Option<EligibilityReport>;

    fn insert(&self, phone: PhoneNumber, report: EligibilityReport);

    /// Drop every expired entry, returning how many were removed.
    fn sweep(&self) -> usize;

    fn stats(&self) -> CacheStats;
}
