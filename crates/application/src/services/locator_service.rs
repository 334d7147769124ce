//! Locator service - geocode, nearest stop, nearby places
//!
//! Runs the three collaborators strictly in sequence for one place query:
//! the coordinates found by the geocoder feed both the stop lookup and the
//! places search. A missing stop does not stop the pipeline; any upstream
//! failure does.

use std::{fmt, sync::Arc, time::Instant};

use domain::{GeoLocation, Place, PlaceQuery, TransitStop};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeocoderPort, PlacesSearchPort, StopFinderPort},
};

/// Default places category
pub const DEFAULT_CATEGORY: &str = "restaurants";

/// Default maximum number of places per report
pub const DEFAULT_LIMIT: usize = 9;

/// Per-call knobs for the places step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorOptions {
    /// Category searched around the located place
    pub category: String,
    /// Maximum number of places returned
    pub limit: usize,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl LocatorOptions {
    /// Create options for a category and limit
    pub fn new(category: impl Into<String>, limit: usize) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }

    /// Check the options before any collaborator is called
    fn validate(&self) -> Result<(), ApplicationError> {
        if self.category.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "places category must not be empty".to_string(),
            ));
        }
        if self.limit == 0 {
            return Err(ApplicationError::InvalidInput(
                "places limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of one successful locate call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReport {
    /// The trimmed query that was located
    pub query: PlaceQuery,
    /// Coordinates of the geocoder's first candidate
    pub coordinates: GeoLocation,
    /// Nearest transit stop, `None` when the stop finder had nothing nearby
    pub stop: Option<TransitStop>,
    /// Category the places were searched for
    pub category: String,
    /// Nearby places in the upstream order
    pub places: Vec<Place>,
}

impl LocationReport {
    /// Whether a transit stop was found
    #[must_use]
    pub const fn has_stop(&self) -> bool {
        self.stop.is_some()
    }
}

/// Service orchestrating the locate pipeline
#[derive(Clone)]
pub struct LocatorService {
    geocoder: Arc<dyn GeocoderPort>,
    stop_finder: Arc<dyn StopFinderPort>,
    places: Arc<dyn PlacesSearchPort>,
    options: LocatorOptions,
}

impl fmt::Debug for LocatorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocatorService")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl LocatorService {
    /// Create a locator with the default options
    pub fn new(
        geocoder: Arc<dyn GeocoderPort>,
        stop_finder: Arc<dyn StopFinderPort>,
        places: Arc<dyn PlacesSearchPort>,
    ) -> Self {
        Self {
            geocoder,
            stop_finder,
            places,
            options: LocatorOptions::default(),
        }
    }

    /// Replace the default options
    #[must_use]
    pub fn with_options(mut self, options: LocatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Options used by [`Self::locate`]
    pub const fn options(&self) -> &LocatorOptions {
        &self.options
    }

    /// Locate a place with the service's default options
    pub async fn locate(&self, query: &str) -> Result<LocationReport, ApplicationError> {
        self.locate_with(query, &self.options).await
    }

    /// Locate a place, overriding category and limit for this call
    #[instrument(skip(self, options), fields(category = %options.category, limit = options.limit))]
    pub async fn locate_with(
        &self,
        query: &str,
        options: &LocatorOptions,
    ) -> Result<LocationReport, ApplicationError> {
        let query = PlaceQuery::new(query)?;
        options.validate()?;
        let start = Instant::now();

        let coordinates = self
            .geocoder
            .geocode(&query)
            .await
            .inspect_err(|e| warn!(error = %e, "Geocoding failed"))?;
        info!(query = %query, coordinates = %coordinates, "Resolved place");

        let stop = self
            .stop_finder
            .nearest_stop(&coordinates)
            .await
            .inspect_err(|e| warn!(error = %e, "Stop lookup failed"))?;
        match &stop {
            Some(stop) => info!(stop = %stop.name, accessible = stop.wheelchair_accessible, "Found nearest stop"),
            None => warn!(coordinates = %coordinates, "No transit stop nearby"),
        }

        let mut places = self
            .places
            .nearby_places(&coordinates, &options.category, options.limit)
            .await
            .inspect_err(|e| warn!(error = %e, "Places search failed"))?;
        places.truncate(options.limit);

        debug!(
            places = places.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Locate completed"
        );

        Ok(LocationReport {
            query,
            coordinates,
            stop,
            category: options.category.clone(),
            places,
        })
    }
}
