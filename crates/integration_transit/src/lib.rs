//! Public transit integration for StopFinder
//!
//! Provides nearest-stop lookup via the [MBTA v3 API](https://api-v3.mbta.com)
//! and free-text place geocoding via the
//! [Mapbox Search Box API](https://docs.mapbox.com/api/search/search-box/).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other integration crates.
//! [`TransitClient`] defines the interface for distance-sorted stop search,
//! implemented by [`MbtaTransitClient`]. [`GeocodingClient`] handles place-to-coordinate
//! conversion via [`MapboxGeocodingClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_transit::{MbtaConfig, MbtaTransitClient, TransitClient};
//!
//! let config = MbtaConfig::with_api_key("my-key");
//! let client = MbtaTransitClient::new(&config)?;
//!
//! let nearest = client.nearest_stop(42.3554, -71.0655).await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{MbtaTransitClient, TransitClient};
pub use config::MbtaConfig;
pub use error::TransitError;
pub use geocoding::{GeocodingClient, GeocodingError, MapboxConfig, MapboxGeocodingClient};
pub use models::{Stop, WheelchairBoarding};
