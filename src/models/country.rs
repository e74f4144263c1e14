use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid 2-letter country code.")]
    InvalidCountryCode(String),
}

/// Two-character country identifier, stored trimmed and lower-cased.
/// Length is measured in UTF-16 code units, as the browser does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let code = raw.trim().to_lowercase();
        if code.encode_utf16().count() != 2 {
            return Err(ValidationError::InvalidCountryCode(raw.to_string()));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inclusive year span sent as the population `limit`. Both bounds are opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRange {
    pub start: String,
    pub end: String,
}

impl YearRange {
    /// Returns `None` unless both bounds are non-empty after trimming.
    pub fn from_bounds(start: &str, end: &str) -> Option<Self> {
        let start = start.trim();
        let end = end.trim();
        if start.is_empty() || end.is_empty() {
            return None;
        }
        Some(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
