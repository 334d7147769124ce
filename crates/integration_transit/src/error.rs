//! Stop lookup error types

use thiserror::Error;

/// Errors returned by the MBTA stop lookup
#[derive(Debug, Error)]
pub enum TransitError {
    /// The MBTA endpoint could not be reached
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The MBTA API answered with an unexpected status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The stop list did not have the expected JSON:API shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The MBTA API rejected the key (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Too many requests for this key (429)
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Value of the `Retry-After` header, when present
        retry_after_secs: Option<u64>,
    },

    /// The client could not be built from its configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// No response within the configured timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// Configured timeout in seconds
        timeout_secs: u64,
    },
}

impl TransitError {
    /// Whether a later attempt could succeed unchanged
    ///
    /// Informational only; the stop lookup itself never retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}
