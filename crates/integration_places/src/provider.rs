//! Places provider trait

use async_trait::async_trait;

use crate::{LocalResult, PlacesError};

/// Trait for nearby-places search providers
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Search for places matching `query` around a coordinate pair
    ///
    /// # Arguments
    ///
    /// * `latitude` / `longitude` - Center of the search
    /// * `query` - Free-text category, e.g. "restaurants"
    /// * `max_results` - Maximum number of results to return
    ///
    /// Results keep the provider's order. An empty list is a valid answer.
    async fn search_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<LocalResult>, PlacesError>;

    /// Get the provider name (e.g., "serpapi")
    fn provider_name(&self) -> &'static str;
}
