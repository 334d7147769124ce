#![forbid(unsafe_code)]
//! Nearby places integration for StopFinder
//!
//! Searches for points of interest (restaurants by default) around a coordinate
//! pair via the [SerpAPI](https://serpapi.com/google-maps-api) Google Maps engine.
//!
//! # Architecture
//!
//! The crate follows a provider pattern: [`PlacesProvider`] is the common trait,
//! implemented by [`SerpApiClient`]. Results keep the upstream order and carry
//! absent fields as `None`.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_places::{PlacesProvider, SerpApiClient, SerpApiConfig};
//!
//! let config = SerpApiConfig::with_api_key("my-key");
//! let client = SerpApiClient::new(&config)?;
//!
//! let places = client.search_nearby(42.3554, -71.0655, "restaurants", 9).await?;
//! for place in places {
//!     println!("{:?} ({:?})", place.name, place.rating);
//! }
//! ```

mod config;
mod error;
mod models;
mod provider;
mod serpapi;

pub use config::{MAX_ZOOM, MIN_ZOOM, SerpApiConfig};
pub use error::PlacesError;
pub use models::LocalResult;
pub use provider::PlacesProvider;
pub use serpapi::SerpApiClient;
