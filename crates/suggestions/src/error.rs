//! Error types for the suggestion providers

use std::fmt;

/// Errors that can occur while looking up suggestions
#[derive(Debug)]
pub enum SuggestionError {
    /// Backend request or response decoding failed
    LookupError(String),

    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LookupError(msg) => write!(f, "Suggestion lookup failed: {msg}"),
            Self::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for SuggestionError {}

impl From<SuggestionError> for adamftd_core::error::Error {
    fn from(err: SuggestionError) -> Self {
        match err {
            SuggestionError::LookupError(msg) => adamftd_core::error::Error::Lookup(msg),
            SuggestionError::ConfigError(msg) => adamftd_core::error::Error::Config(msg),
        }
    }
}
