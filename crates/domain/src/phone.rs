use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Number of digits in an OPT-NC landline number.
pub const LANDLINE_DIGITS: usize = 6;

/// Validated landline number: exactly six ASCII digits.
///
/// This is the canonical key for both the cache and the operator's form.
/// The only way to obtain one is [`PhoneNumber::parse`], so every value in
/// circulation is already normalized. Uses `Arc<str>` for zero-cost cloning
/// across resolver → cache → flight layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneNumber(Arc<str>);

impl PhoneNumber {
    /// Normalize and validate a raw phone number.
    ///
    /// Strips spaces and periods ("25.73.64" and "25 73 64" both become
    /// "257364"), then requires the remainder to be exactly six decimal
    /// digits. No other transformation is applied.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let cleaned: String = raw.chars().filter(|c| *c != ' ' && *c != '.').collect();

        if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidPhoneNumber(
                "must contain only digits".to_string(),
            ));
        }

        if cleaned.len() != LANDLINE_DIGITS {
            return Err(DomainError::InvalidPhoneNumber(format!(
                "must contain exactly {} digits, found: {}",
                LANDLINE_DIGITS,
                cleaned.len()
            )));
        }

        Ok(Self(Arc::from(cleaned.as_str())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
