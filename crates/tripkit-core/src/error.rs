//! Error types for tripkit

use thiserror::Error;

/// Result type alias using TripKitError
pub type Result<T> = std::result::Result<T, TripKitError>;

/// Error type alias for convenience
pub type Error = TripKitError;

/// Main error type for tripkit
#[derive(Debug, Error)]
pub enum TripKitError {
    /// The embedding or generation model cannot be loaded or reached at all.
    /// Indicates a deployment problem, not a per-request condition.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Generation service unreachable: {0}")]
    ServiceUnreachable(String),

    #[error("Generation timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Backend reports it is still loading or warming up.
    #[error("Generation service temporarily unavailable: {0}")]
    TransientUnavailable(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Corpus is empty, nothing to retrieve")]
    EmptyCorpus,

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl TripKitError {
    /// Whether a caller may reasonably retry the failed request as-is.
    /// Timeouts and warm-up signals are transient; everything else needs
    /// operator intervention or a different request.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::TransientUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(TripKitError::Timeout { seconds: 15 }.is_retryable());
        assert!(TripKitError::TransientUnavailable("loading".into()).is_retryable());
        assert!(!TripKitError::AuthenticationFailed("bad key".into()).is_retryable());
        assert!(!TripKitError::ModelUnavailable("no model".into()).is_retryable());
        assert!(!TripKitError::EmptyCorpus.is_retryable());
    }
}
