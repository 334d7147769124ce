//! Places search error types

use thiserror::Error;

/// Errors that can occur during places search operations
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Connection to the search service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to search service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from search service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service answered with an explicit error payload
    #[error("Search API error: {0}")]
    Api(String),

    /// Search category is empty
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// API key is missing or invalid
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl PlacesError {
    /// Returns true if this error is retryable
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(PlacesError::ConnectionFailed("x".to_string()).is_retryable());
        assert!(PlacesError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(!PlacesError::Api("Invalid API key".to_string()).is_retryable());
        assert!(!PlacesError::ParseError("x".to_string()).is_retryable());
    }

    #[test]
    fn test_api_error_display() {
        let err = PlacesError::Api("Invalid API key. Your API key should be here".to_string());
        assert!(err.to_string().contains("Invalid API key"));
    }
}
