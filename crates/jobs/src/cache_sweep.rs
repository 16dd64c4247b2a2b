use ferrule_application::use_cases::PurgeExpiredUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Periodic reclamation of expired cache entries.
///
/// Reads never remove anything, so without this job an idle key would sit
/// in the map until process exit. The job owns its schedule and stops
/// when its cancellation token fires.
pub struct CacheSweepJob {
    purge: Arc<PurgeExpiredUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(purge: Arc<PurgeExpiredUseCase>) -> Self {
        Self {
            purge,
            interval_secs: 3600,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting cache sweep job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            // The first tick fires immediately; skip it so a fresh cache
            // is not swept at startup.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.purge.execute().await;
                        if removed > 0 {
                            info!(removed, "Cache sweep completed");
                        }
                    }
                }
            }
        });
    }
}
