use async_trait::async_trait;
use ferrule_domain::{DomainError, EligibilityReport, PhoneNumber};

/// Outcome of a resolution, with provenance for the API's `from_cache`
/// field.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub report: EligibilityReport,
    pub from_cache: bool,
}

impl Resolution {
    pub fn fresh(report: EligibilityReport) -> Self {
        Self {
            report,
            from_cache: false,
        }
    }

    pub fn cached(report: EligibilityReport) -> Self {
        Self {
            report,
            from_cache: true,
        }
    }
}

/// Resolves a validated number to a report, consulting the cache before
/// acquiring a fresh page.
#[async_trait]
pub trait EligibilityResolver: Send + Sync {
    async fn resolve(&self, phone: &PhoneNumber) -> Result<Resolution, DomainError>;
}
