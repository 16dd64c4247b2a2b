//! Ferrule Domain Layer
pub mod config;
pub mod eligibility;
pub mod errors;
pub mod phone;

pub use config::{CliOverrides, Config, ConfigError};
pub use eligibility::{
    AdslEligibility, EligibilityReport, EligibilityStatus, FiberEligibility, IspProvider,
};
pub use errors::DomainError;
pub use phone::PhoneNumber;
