//! Geocoding port
//!
//! Resolves a free-text place description to coordinates.

use async_trait::async_trait;
use domain::{GeoLocation, PlaceQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Resolve a place query to the coordinates of the best candidate
    ///
    /// Returns `ApplicationError::NotFound` when the service has no
    /// candidates and `ApplicationError::Upstream` for any service failure.
    async fn geocode(&self, query: &PlaceQuery) -> Result<GeoLocation, ApplicationError>;
}
