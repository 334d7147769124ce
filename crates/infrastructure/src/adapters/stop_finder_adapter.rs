//! Stop finder adapter - Implements StopFinderPort using the MBTA client

use application::{ApplicationError, Collaborator, ports::StopFinderPort};
use async_trait::async_trait;
use domain::{GeoLocation, TransitStop};
use integration_transit::{MbtaConfig, MbtaTransitClient, Stop, TransitClient, TransitError};
use tracing::{debug, instrument};

/// Adapter for nearest-stop lookups via the MBTA v3 API
pub struct MbtaStopFinderAdapter {
    client: MbtaTransitClient,
}

impl std::fmt::Debug for MbtaStopFinderAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MbtaStopFinderAdapter")
            .field("client", &self.client)
            .finish()
    }
}

impl MbtaStopFinderAdapter {
    /// Wrap an existing client
    pub const fn new(client: MbtaTransitClient) -> Self {
        Self { client }
    }

    /// Create the client and adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the API key is missing
    /// or the HTTP client cannot be built.
    pub fn from_config(config: &MbtaConfig) -> Result<Self, ApplicationError> {
        let client = MbtaTransitClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    fn map_error(err: TransitError) -> ApplicationError {
        match err {
            TransitError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::upstream(Collaborator::StopFinder, other.to_string()),
        }
    }

    /// Straight-line distance from the searched point, when the stop has coordinates
    fn distance_km(stop: &Stop, from: &GeoLocation) -> Option<f64> {
        let lat = stop.latitude?;
        let lon = stop.longitude?;
        GeoLocation::new(lat, lon).ok().map(|at| from.distance_km(&at))
    }

    /// Convert an integration stop to the domain descriptor
    fn to_transit_stop(stop: Stop) -> TransitStop {
        let accessible = stop.is_wheelchair_accessible();
        TransitStop::new(stop.name, accessible)
    }
}

#[async_trait]
impl StopFinderPort for MbtaStopFinderAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn nearest_stop(
        &self,
        location: &GeoLocation,
    ) -> Result<Option<TransitStop>, ApplicationError> {
        let stop = self
            .client
            .nearest_stop(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        if let Some(stop) = &stop {
            debug!(
                stop_id = %stop.id,
                distance_km = ?Self::distance_km(stop, location),
                "Nearest stop lookup finished"
            );
        }
        Ok(stop.map(Self::to_transit_stop))
    }
}

#[cfg(test)]
mod tests {
    use integration_transit::WheelchairBoarding;

    use super::*;

    fn stop(boarding: WheelchairBoarding) -> Stop {
        Stop {
            id: "place-pktrm".to_string(),
            name: "Park Street".to_string(),
            latitude: Some(42.356_395),
            longitude: Some(-71.062_424),
            wheelchair_boarding: boarding,
        }
    }

    #[test]
    fn distance_from_searched_point() {
        let common = GeoLocation::new(42.3554, -71.0655).unwrap();
        let distance =
            MbtaStopFinderAdapter::distance_km(&stop(WheelchairBoarding::Accessible), &common)
                .unwrap();
        assert!(distance > 0.1 && distance < 0.5);

        let mut unplaced = stop(WheelchairBoarding::Accessible);
        unplaced.latitude = None;
        assert!(MbtaStopFinderAdapter::distance_km(&unplaced, &common).is_none());
    }

    #[test]
    fn accessible_only_for_code_one() {
        assert!(MbtaStopFinderAdapter::to_transit_stop(stop(WheelchairBoarding::Accessible))
            .wheelchair_accessible);
        for boarding in [
            WheelchairBoarding::NoInformation,
            WheelchairBoarding::Inaccessible,
            WheelchairBoarding::Unrecognized(7),
        ] {
            let converted = MbtaStopFinderAdapter::to_transit_stop(stop(boarding));
            assert_eq!(converted.name, "Park Street");
            assert!(!converted.wheelchair_accessible);
        }
    }

    #[test]
    fn failures_map_to_upstream_stop_finder() {
        let err = MbtaStopFinderAdapter::map_error(TransitError::RequestFailed(
            "HTTP 500".to_string(),
        ));
        assert_eq!(err.collaborator(), Some(Collaborator::StopFinder));

        let err = MbtaStopFinderAdapter::map_error(TransitError::ParseError("bad".to_string()));
        assert_eq!(err.collaborator(), Some(Collaborator::StopFinder));
    }

    #[test]
    fn from_config_requires_key() {
        let result = MbtaStopFinderAdapter::from_config(&MbtaConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }
}
