use ferrule_application::ports::{CacheStats, ResultCache};
use ferrule_domain::{EligibilityReport, PhoneNumber};
use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tracing::debug;

use super::CacheMetrics;

struct CacheEntry {
    report: EligibilityReport,
    expires_at: Instant,
}

/// In-memory TTL cache for eligibility reports.
///
/// Reads never mutate the map: an expired entry is reported as a miss and
/// left in place until the next [`sweep`](ResultCache::sweep). Inserts for
/// an existing key replace the entry and restart its TTL.
pub struct EligibilityCache {
    entries: RwLock<HashMap<PhoneNumber, CacheEntry>>,
    ttl: Duration,
    metrics: Arc<CacheMetrics>,
}

impl EligibilityCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }
}

impl ResultCache for EligibilityCache {
    fn get(&self, phone: &PhoneNumber) -> Option<EligibilityReport> {
        let entries = self.entries.read().unwrap();

        match entries.get(phone) {
            Some(entry) if Instant::now() < entry.expires_at => {
                self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.report.clone())
            }
            _ => {
                self.metrics.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    fn insert(&self, phone: PhoneNumber, report: EligibilityReport) {
        let expires_at = Instant::now() + self.ttl;
        let mut entries = self.entries.write().unwrap();

        entries.insert(phone, CacheEntry { report, expires_at });
        self.metrics.insertions.fetch_add(1, Ordering::Relaxed);
    }

    fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().unwrap();

        let before = entries.len();
        entries.retain(|_, entry| now < entry.expires_at);
        let removed = before - entries.len();

        drop(entries);

        self.metrics.sweeps.fetch_add(1, Ordering::Relaxed);
        if removed > 0 {
            self.metrics
                .expired_evictions
                .fetch_add(removed as u64, Ordering::Relaxed);
            debug!(removed, "Swept expired cache entries");
        }

        removed
    }

    fn stats(&self) -> CacheStats {
        let entries = self.entries.read().unwrap().len();

        CacheStats {
            entries,
            ttl_secs: self.ttl.as_secs(),
            hits: self.metrics.hits.load(Ordering::Relaxed),
            misses: self.metrics.misses.load(Ordering::Relaxed),
            insertions: self.metrics.insertions.load(Ordering::Relaxed),
            expired_evictions: self.metrics.expired_evictions.load(Ordering::Relaxed),
            sweeps: self.metrics.sweeps.load(Ordering::Relaxed),
            hit_rate: self.metrics.hit_rate(),
        }
    }
}
