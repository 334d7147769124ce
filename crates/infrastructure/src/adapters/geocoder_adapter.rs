//! Geocoder adapter - Implements GeocoderPort using integration_transit's Mapbox client

use application::{ApplicationError, Collaborator, ports::GeocoderPort};
use async_trait::async_trait;
use domain::{GeoLocation, PlaceQuery};
use integration_transit::{GeocodingClient, GeocodingError, MapboxConfig, MapboxGeocodingClient};
use tracing::{debug, instrument};

/// Adapter for forward geocoding via the Mapbox Search Box API
pub struct MapboxGeocoderAdapter {
    client: MapboxGeocodingClient,
}

impl std::fmt::Debug for MapboxGeocoderAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxGeocoderAdapter")
            .field("client", &self.client)
            .finish()
    }
}

impl MapboxGeocoderAdapter {
    /// Wrap an existing client
    pub const fn new(client: MapboxGeocodingClient) -> Self {
        Self { client }
    }

    /// Create the client and adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the access token is
    /// missing or the HTTP client cannot be built.
    pub fn from_config(config: &MapboxConfig) -> Result<Self, ApplicationError> {
        let client = MapboxGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::NoResults(query) => ApplicationError::NotFound(query),
            GeocodingError::InvalidQuery(e) => ApplicationError::InvalidInput(e),
            GeocodingError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::upstream(Collaborator::Geocoder, other.to_string()),
        }
    }
}

#[async_trait]
impl GeocoderPort for MapboxGeocoderAdapter {
    #[instrument(skip(self), fields(query = %query))]
    async fn geocode(&self, query: &PlaceQuery) -> Result<GeoLocation, ApplicationError> {
        let location = self
            .client
            .geocode(query.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(location = %location, "Geocoded place");
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_results_maps_to_not_found() {
        let err = MapboxGeocoderAdapter::map_error(GeocodingError::NoResults(
            "Atlantis".to_string(),
        ));
        assert_eq!(err, ApplicationError::NotFound("Atlantis".to_string()));
    }

    #[test]
    fn invalid_query_maps_to_invalid_input() {
        let err =
            MapboxGeocoderAdapter::map_error(GeocodingError::InvalidQuery("empty".to_string()));
        assert!(matches!(err, ApplicationError::InvalidInput(_)));
    }

    #[test]
    fn service_failures_map_to_upstream_geocoder() {
        let errors = [
            GeocodingError::RequestFailed("HTTP 503".to_string()),
            GeocodingError::ConnectionFailed("refused".to_string()),
            GeocodingError::ParseError("missing coordinates".to_string()),
            GeocodingError::AuthenticationFailed("bad token".to_string()),
            GeocodingError::Timeout { timeout_secs: 10 },
            GeocodingError::RateLimitExceeded {
                retry_after_secs: None,
            },
        ];
        for err in errors {
            let mapped = MapboxGeocoderAdapter::map_error(err);
            assert_eq!(mapped.collaborator(), Some(Collaborator::Geocoder));
        }
    }

    #[test]
    fn from_config_requires_token() {
        let result = MapboxGeocoderAdapter::from_config(&MapboxConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let adapter = MapboxGeocoderAdapter::from_config(&MapboxConfig::for_testing()).unwrap();
        let debug = format!("{adapter:?}");
        assert!(debug.contains("MapboxGeocoderAdapter"));
        assert!(!debug.contains("test-token"));
    }
}
