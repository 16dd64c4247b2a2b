//! Caching resolver over the acquirer and classifier.

pub mod flight;

pub use flight::FlightGroup;

use async_trait::async_trait;
use ferrule_application::ports::{
    EligibilityResolver, MarkupClassifier, PageAcquirer, Resolution, ResultCache,
};
use ferrule_domain::{DomainError, PhoneNumber};
use futures::FutureExt;
use std::sync::Arc;
use tracing::{debug, info};

/// Cache-first resolver: a hit answers immediately, a miss joins the
/// single flight for that number, and a successful flight stores its
/// report (found or not) before waiters see it. Failed acquisitions are
/// never cached.
pub struct CachedEligibilityResolver {
    cache: Arc<dyn ResultCache>,
    acquirer: Arc<dyn PageAcquirer>,
    classifier: Arc<dyn MarkupClassifier>,
    flights: FlightGroup,
}

impl CachedEligibilityResolver {
    pub fn new(
        cache: Arc<dyn ResultCache>,
        acquirer: Arc<dyn PageAcquirer>,
        classifier: Arc<dyn MarkupClassifier>,
    ) -> Self {
        Self {
            cache,
            acquirer,
            classifier,
            flights: FlightGroup::new(),
        }
    }
}

#[async_trait]
impl EligibilityResolver for CachedEligibilityResolver {
    async fn resolve(&self, phone: &PhoneNumber) -> Result<Resolution, DomainError> {
        if let Some(report) = self.cache.get(phone) {
            debug!(phone = %phone, "Cache hit");
            return Ok(Resolution::cached(report));
        }

        let work = {
            let acquirer = Arc::clone(&self.acquirer);
            let classifier = Arc::clone(&self.classifier);
            let cache = Arc::clone(&self.cache);
            let phone = phone.clone();

            async move {
                let markup = acquirer.acquire(&phone).await?;
                let report = classifier.classify(&markup, &phone);

                cache.insert(phone.clone(), report.clone());

                info!(
                    phone = %phone,
                    found = report.found,
                    "Fresh eligibility report acquired"
                );

                Ok(report)
            }
            .boxed()
        };

        let report = self.flights.run(phone.clone(), work).await?;
        Ok(Resolution::fresh(report))
    }
}
