use async_trait::async_trait;
use ferrule_domain::{DomainError, PhoneNumber};

/// Drives the operator's eligibility form for one number and returns the
/// inner HTML of the result panel.
///
/// The whole interaction runs under a single deadline; implementations
/// fail with [`DomainError::LookupTimeout`] rather than return a partial
/// page.
#[async_trait]
pub trait PageAcquirer: Send + Sync {
    async fn acquire(&self, phone: &PhoneNumber) -> Result<String, DomainError>;
}
