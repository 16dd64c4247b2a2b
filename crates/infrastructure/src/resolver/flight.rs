use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use ferrule_domain::{DomainError, EligibilityReport, PhoneNumber};
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use std::sync::Arc;

type FlightResult = Result<EligibilityReport, DomainError>;
type FlightFuture = Shared<BoxFuture<'static, FlightResult>>;

/// Collapses concurrent lookups for the same number into a single page
/// acquisition.
///
/// The first caller for a key becomes the leader and spawns the work as
/// its own task, so it completes (and unregisters itself) even if every
/// waiter is cancelled. Later callers clone the shared future and receive
/// the same result, success or error.
pub struct FlightGroup {
    inflight: Arc<DashMap<PhoneNumber, FlightFuture>>,
}

impl FlightGroup {
    pub fn new() -> Self {
        Self {
            inflight: Arc::new(DashMap::new()),
        }
    }

    /// Number of lookups currently in progress.
    pub fn in_flight(&self) -> usize {
        self.inflight.len()
    }

    /// Join the flight for `key`, starting it with `work` if none exists.
    pub async fn run(
        &self,
        key: PhoneNumber,
        work: BoxFuture<'static, FlightResult>,
    ) -> FlightResult {
        let flight = match self.inflight.entry(key.clone()) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                let map = Arc::clone(&self.inflight);
                let handle = tokio::spawn(async move {
                    let result = work.await;
                    map.remove(&key);
                    result
                });

                let fut: FlightFuture = async move {
                    match handle.await {
                        Ok(result) => result,
                        Err(e) => Err(DomainError::BrowserSession(format!(
                            "lookup task failed: {e}"
                        ))),
                    }
                }
                .boxed()
                .shared();

                entry.insert(fut.clone());
                fut
            }
        };

        flight.await
    }
}

impl Default for FlightGroup {
    fn default() -> Self {
        Self::new()
    }
}
