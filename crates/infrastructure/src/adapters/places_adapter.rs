//! Places adapter - Implements PlacesSearchPort using integration_places

use application::{ApplicationError, Collaborator, ports::PlacesSearchPort};
use async_trait::async_trait;
use domain::{GeoLocation, Place};
use integration_places::{LocalResult, PlacesError, PlacesProvider, SerpApiClient, SerpApiConfig};
use tracing::{debug, instrument};

/// Adapter for nearby places search via SerpAPI's Google Maps engine
pub struct SerpApiPlacesAdapter {
    client: SerpApiClient,
}

impl std::fmt::Debug for SerpApiPlacesAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiPlacesAdapter")
            .field("provider", &self.client.provider_name())
            .finish_non_exhaustive()
    }
}

impl SerpApiPlacesAdapter {
    /// Wrap an existing client
    pub const fn new(client: SerpApiClient) -> Self {
        Self { client }
    }

    /// Create the client and adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the API key is missing
    /// or the HTTP client cannot be built.
    pub fn from_config(config: &SerpApiConfig) -> Result<Self, ApplicationError> {
        let client = SerpApiClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    fn map_error(err: PlacesError) -> ApplicationError {
        match err {
            PlacesError::InvalidQuery(e) => ApplicationError::InvalidInput(e),
            PlacesError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::upstream(Collaborator::PlacesSearch, other.to_string()),
        }
    }

    /// Convert integration result to domain place
    fn to_place(result: LocalResult) -> Place {
        Place {
            name: result.name,
            rating: result.rating,
            address: result.address,
            phone: result.phone,
        }
    }
}

#[async_trait]
impl PlacesSearchPort for SerpApiPlacesAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn nearby_places(
        &self,
        location: &GeoLocation,
        category: &str,
        limit: usize,
    ) -> Result<Vec<Place>, ApplicationError> {
        let results = self
            .client
            .search_nearby(location.latitude(), location.longitude(), category, limit)
            .await
            .map_err(Self::map_error)?;

        debug!(count = results.len(), "Places search finished");
        Ok(results.into_iter().map(Self::to_place).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_keeps_absent_fields_absent() {
        let result = LocalResult {
            position: Some(1),
            name: Some("Tatte".to_string()),
            rating: None,
            address: Some("1 Beacon St".to_string()),
            phone: None,
        };
        let place = SerpApiPlacesAdapter::to_place(result);
        assert_eq!(place.name.as_deref(), Some("Tatte"));
        assert!(place.rating.is_none());
        assert_eq!(place.address.as_deref(), Some("1 Beacon St"));
        assert!(place.phone.is_none());
    }

    #[test]
    fn embedded_error_maps_to_upstream_places() {
        let err = SerpApiPlacesAdapter::map_error(PlacesError::Api("Invalid API key".to_string()));
        assert_eq!(err.collaborator(), Some(Collaborator::PlacesSearch));
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn from_config_requires_key() {
        let result = SerpApiPlacesAdapter::from_config(&SerpApiConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }
}
