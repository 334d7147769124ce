//! Nearby places search port

use async_trait::async_trait;
use domain::{GeoLocation, Place};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for nearby point-of-interest search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlacesSearchPort: Send + Sync {
    /// Search for places of `category` around `location`
    ///
    /// Returns at most `limit` places in the service's own order.
    /// An empty list is a valid answer.
    async fn nearby_places(
        &self,
        location: &GeoLocation,
        category: &str,
        limit: usize,
    ) -> Result<Vec<Place>, ApplicationError>;
}
