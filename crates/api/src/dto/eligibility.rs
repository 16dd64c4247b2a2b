use ferrule_domain::EligibilityReport;
use serde::{Deserialize, Serialize};

/// Query string accepted by the GET variant of the eligibility endpoint.
#[derive(Deserialize, Debug)]
pub struct EligibilityQuery {
    pub phone: Option<String>,
}

/// JSON body accepted by the POST variant of the eligibility endpoint.
///
/// A missing `phone_number` field deserializes to an empty string and is
/// rejected by validation, not by the JSON decoder.
#[derive(Deserialize, Debug)]
pub struct CheckRequest {
    #[serde(default)]
    pub phone_number: String,
}

/// Success envelope returned by both eligibility endpoint variants.
#[derive(Serialize, Debug, Clone)]
pub struct EligibilityResponse {
    pub success: bool,
    pub data: EligibilityReport,
    pub from_cache: bool,
}

/// Error envelope shared by every non-2xx response.
#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}
