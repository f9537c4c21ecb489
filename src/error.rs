//! Error types for content retrieval operations
//!
//! This module defines the error taxonomy for the retrieval layer. Provider
//! errors are recovered inside fallback chains and never escalate past them;
//! only exhaustion of a whole chain, a failed topic match, or missing
//! configuration surface to callers.

use thiserror::Error;

/// Main error type for content retrieval operations
#[derive(Error, Debug)]
pub enum ContentError {
    /// Every source in a fallback chain was exhausted for one item
    #[error("content not found: {0}")]
    NotFound(String),

    /// A single provider in a chain had no answer or errored.
    /// Recovered locally by advancing to the next provider.
    #[error("provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// The generative topic-matching call itself failed
    #[error("topic match failed: {0}")]
    MatchFailed(String),

    /// Required external configuration is absent or invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP transport error (wrapper)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("error: {0}")]
    Other(String),
}

impl ContentError {
    /// Build a provider error for a named source in a fallback chain
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        ContentError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for content retrieval operations
pub type Result<T> = std::result::Result<T, ContentError>;

impl From<String> for ContentError {
    fn from(s: String) -> Self {
        ContentError::Other(s)
    }
}

impl From<&str> for ContentError {
    fn from(s: &str) -> Self {
        ContentError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ContentError::NotFound("m62767".to_string());
        assert_eq!(error.to_string(), "content not found: m62767");

        let provider_error = ContentError::provider("bucket", "status 503");
        assert!(provider_error.to_string().contains("bucket"));
        assert!(provider_error.to_string().contains("503"));

        let config_error = ContentError::Config("GEMINI_API_KEY not set".to_string());
        assert!(config_error.to_string().starts_with("configuration error"));
    }

    #[test]
    fn test_error_conversion() {
        let error: ContentError = "test error".into();
        assert!(matches!(error, ContentError::Other(_)));

        let error: ContentError = "test error".to_string().into();
        assert!(matches!(error, ContentError::Other(_)));
    }
}
