//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoder_adapter;
mod places_adapter;
mod stop_finder_adapter;

use std::sync::Arc;

use application::{ApplicationError, LocatorService};
use tracing::info;

pub use geocoder_adapter::MapboxGeocoderAdapter;
pub use places_adapter::SerpApiPlacesAdapter;
pub use stop_finder_adapter::MbtaStopFinderAdapter;

use crate::config::AppConfig;

/// Wire a [`LocatorService`] from validated configuration
///
/// Validation runs first, so missing credentials are reported here rather
/// than on the first request.
pub fn build_locator_service(config: &AppConfig) -> Result<LocatorService, ApplicationError> {
    config.validate()?;

    let geocoder = MapboxGeocoderAdapter::from_config(&config.geocoding.to_mapbox_config())?;
    let stop_finder = MbtaStopFinderAdapter::from_config(&config.transit.to_mbta_config())?;
    let places = SerpApiPlacesAdapter::from_config(&config.places.to_serpapi_config())?;

    info!(
        category = %config.locator.category,
        limit = config.locator.limit,
        "Locator service ready"
    );

    Ok(
        LocatorService::new(Arc::new(geocoder), Arc::new(stop_finder), Arc::new(places))
            .with_options(config.locator.to_options()),
    )
}
