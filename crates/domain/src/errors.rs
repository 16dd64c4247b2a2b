use thiserror::Error;

/// Errors produced by the eligibility pipeline.
///
/// `Clone` is required: a single acquisition can be awaited by several
/// coalesced callers, and each of them receives the same failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    #[error("Browser session failed: {0}")]
    BrowserSession(String),

    #[error("Expected element not found on page: {0}")]
    ElementNotFound(String),

    #[error("Eligibility lookup timed out")]
    LookupTimeout,
}

impl DomainError {
    /// True for failures of the external acquisition (browser, page markup,
    /// deadline) as opposed to caller input errors.
    pub fn is_acquisition_failure(&self) -> bool {
        matches!(
            self,
            DomainError::BrowserSession(_)
                | DomainError::ElementNotFound(_)
                | DomainError::LookupTimeout
        )
    }
}
