//! Mapbox geocoding client
//!
//! Converts free-form place descriptions to geographic coordinates using
//! the [Mapbox Search Box](https://docs.mapbox.com/api/search/search-box/)
//! `forward` endpoint. The first returned feature is taken as authoritative.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Configuration for the Mapbox geocoding service
#[derive(Clone, Serialize, Deserialize)]
pub struct MapboxConfig {
    /// Base URL for the Mapbox API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Access token sent as the `access_token` query parameter
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,

    /// Connection timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_geocoding_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    10
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            access_token: None,
            timeout_secs: default_geocoding_timeout_secs(),
        }
    }
}

impl MapboxConfig {
    /// Default configuration with the given access token
    #[must_use]
    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            access_token: Some("test-token".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.access_token.as_deref().is_none_or(str::is_empty) {
            return Err("access_token must be set".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Query was empty; no request is sent
    #[error("Invalid geocoding query: {0}")]
    InvalidQuery(String),

    /// The service returned no candidates for the query
    #[error("No coordinates found for location '{0}'")]
    NoResults(String),

    /// Access token was rejected
    #[error("Geocoding authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Geocoding rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Configuration error
    #[error("Geocoding configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Geocoding request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl GeocodingError {
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

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form place description to geographic coordinates
    async fn geocode(&self, query: &str) -> Result<GeoLocation, GeocodingError>;
}

/// Mapbox Search Box based geocoding client
pub struct MapboxGeocodingClient {
    client: Client,
    config: MapboxConfig,
    access_token: String,
}

impl std::fmt::Debug for MapboxGeocodingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxGeocodingClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MapboxGeocodingClient {
    /// Create a new Mapbox geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is missing or the HTTP client cannot be initialized.
    pub fn new(config: &MapboxConfig) -> Result<Self, GeocodingError> {
        let access_token = config
            .access_token
            .clone()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                GeocodingError::ConfigurationError("Mapbox access token is required".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("StopFinder/0.1")
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            access_token,
        })
    }

    /// Parse a forward-geocoding response, taking the first feature
    ///
    /// Mapbox reports coordinates as `[longitude, latitude]`.
    fn parse_forward_response(body: &str, query: &str) -> Result<GeoLocation, GeocodingError> {
        let raw: RawForwardResponse =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let feature = raw
            .features
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::NoResults(query.to_string()))?;

        let coordinates = feature
            .geometry
            .map(|g| g.coordinates)
            .ok_or_else(|| GeocodingError::ParseError("Feature has no geometry".to_string()))?;

        let [longitude, latitude, ..] = coordinates[..] else {
            return Err(GeocodingError::ParseError(format!(
                "Expected [longitude, latitude], got {} values",
                coordinates.len()
            )));
        };

        GeoLocation::new(latitude, longitude).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for MapboxGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<GeoLocation, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodingError::InvalidQuery(
                "Query must not be empty".to_string(),
            ));
        }

        let url = format!("{}/search/searchbox/v1/forward", self.config.base_url);
        let params = [("q", query), ("access_token", self.access_token.as_str())];

        debug!(%query, "Geocoding place");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(GeocodingError::AuthenticationFailed(format!(
                "Mapbox rejected the access token (HTTP {status})"
            )));
        }

        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let location = Self::parse_forward_response(&body, query)?;
        debug!(%query, lat = location.latitude(), lon = location.longitude(), "Geocoded place");

        Ok(location)
    }
}

/// Raw Mapbox forward-geocoding response
#[derive(Debug, Deserialize)]
struct RawForwardResponse {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    coordinates: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapbox_config_default() {
        let config = MapboxConfig::default();
        assert_eq!(config.base_url, "https://api.mapbox.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.access_token.is_none());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mapbox_config_for_testing() {
        let config = MapboxConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mapbox_config_debug_redacts_token() {
        let config = MapboxConfig::with_access_token("pk.secret");
        assert!(!format!("{config:?}").contains("pk.secret"));
    }

    #[test]
    fn test_geocoding_error_display() {
        let err = GeocodingError::NoResults("Atlantis".to_string());
        assert!(err.to_string().contains("Atlantis"));

        let err = GeocodingError::Timeout { timeout_secs: 5 };
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_geocoding_error_retryable() {
        assert!(GeocodingError::Timeout { timeout_secs: 5 }.is_retryable());
        assert!(!GeocodingError::NoResults("x".to_string()).is_retryable());
        assert!(!GeocodingError::InvalidQuery("x".to_string()).is_retryable());
    }

    #[test]
    fn test_parse_swaps_longitude_latitude() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [-71.0655, 42.3554] } },
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [-70.0, 41.0] } }
            ]
        }"#;
        let location = MapboxGeocodingClient::parse_forward_response(json, "Boston Common").unwrap();
        assert!((location.latitude() - 42.3554).abs() < f64::EPSILON);
        assert!((location.longitude() - -71.0655).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_empty_features() {
        let result = MapboxGeocodingClient::parse_forward_response(r#"{ "features": [] }"#, "nowhere");
        assert!(matches!(result, Err(GeocodingError::NoResults(q)) if q == "nowhere"));
    }

    #[test]
    fn test_parse_missing_features_is_no_results() {
        let result = MapboxGeocodingClient::parse_forward_response("{}", "nowhere");
        assert!(matches!(result, Err(GeocodingError::NoResults(_))));
    }

    #[test]
    fn test_parse_missing_geometry() {
        let result =
            MapboxGeocodingClient::parse_forward_response(r#"{ "features": [{}] }"#, "x");
        assert!(matches!(result, Err(GeocodingError::ParseError(_))));
    }

    #[test]
    fn test_parse_short_coordinates() {
        let json = r#"{ "features": [{ "geometry": { "coordinates": [-71.0655] } }] }"#;
        let result = MapboxGeocodingClient::parse_forward_response(json, "x");
        assert!(matches!(result, Err(GeocodingError::ParseError(_))));
    }

    #[test]
    fn test_parse_out_of_range_coordinates() {
        let json = r#"{ "features": [{ "geometry": { "coordinates": [-71.0, 142.0] } }] }"#;
        let result = MapboxGeocodingClient::parse_forward_response(json, "x");
        assert!(matches!(result, Err(GeocodingError::ParseError(_))));
    }

    #[test]
    fn test_new_requires_token() {
        let result = MapboxGeocodingClient::new(&MapboxConfig::default());
        assert!(matches!(result, Err(GeocodingError::ConfigurationError(_))));
    }

    #[test]
    fn test_mapbox_config_serialization_skips_token() {
        let config = MapboxConfig::with_access_token("pk.secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("pk.secret"));
        let deserialized: MapboxConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
    }
}
