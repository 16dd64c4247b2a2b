use crate::phone::PhoneNumber;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Eligibility verdict for one service tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EligibilityStatus {
    Eligible,
    NonEligible,
    Unknown,
}

impl EligibilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EligibilityStatus::Eligible => "eligible",
            EligibilityStatus::NonEligible => "non-eligible",
            EligibilityStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ADSL (copper) eligibility for a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdslEligibility {
    pub status: EligibilityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Fiber (THD) eligibility for a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiberEligibility {
    pub status: EligibilityStatus,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Installation note from the operator page. Reserved wire field; the
    /// current classifier never populates it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation: Option<String>,
}

/// An ISP reselling connectivity over the operator's infrastructure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IspProvider {
    pub name: String,
    pub url: String,
}

/// Complete result of one eligibility check.
///
/// Invariants: `found == false` implies `adsl` and `fiber` are `None`;
/// `found == true` implies `error_message` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityReport {
    pub phone_number: PhoneNumber,
    pub checked_at: DateTime<Utc>,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adsl: Option<AdslEligibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<FiberEligibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub isp_providers: Vec<IspProvider>,
    /// Raw result-panel markup, kept for diagnostics only. Must be stripped
    /// before the report crosses any external boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_html: Option<String>,
}

impl EligibilityReport {
    /// Empty report for a number: nothing found yet, checked right now.
    pub fn new(phone_number: PhoneNumber) -> Self {
        Self {
            phone_number,
            checked_at: Utc::now(),
            found: false,
            error_message: None,
            adsl: None,
            fiber: None,
            contact_phone: None,
            isp_providers: Vec::new(),
            raw_html: None,
        }
    }

    /// Drop the diagnostic markup before external exposure (API payloads,
    /// `--json` CLI output).
    pub fn without_raw_html(mut self) -> Self {
        self.raw_html = None;
        self
    }
}
