use ferrule_domain::{DomainError, PhoneNumber};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{EligibilityResolver, Resolution};

/// Entry point for a single eligibility check: validate the raw input,
/// then hand the normalized number to the resolver.
pub struct CheckEligibilityUseCase {
    resolver: Arc<dyn EligibilityResolver>,
}

impl CheckEligibilityUseCase {
    pub fn new(resolver: Arc<dyn EligibilityResolver>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, raw_phone: &str) -> Result<Resolution, DomainError> {
        let phone = PhoneNumber::parse(raw_phone)?;

        let resolution = self.resolver.resolve(&phone).await?;

        info!(
            phone = %phone,
            found = resolution.report.found,
            from_cache = resolution.from_cache,
            "Eligibility check completed"
        );

        Ok(resolution)
    }
}
