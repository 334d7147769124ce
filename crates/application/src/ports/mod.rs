//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoder_port;
mod places_search_port;
mod stop_finder_port;

pub use geocoder_port::GeocoderPort;
#[cfg(test)]
pub use geocoder_port::MockGeocoderPort;
#[cfg(test)]
pub use places_search_port::MockPlacesSearchPort;
pub use places_search_port::PlacesSearchPort;
#[cfg(test)]
pub use stop_finder_port::MockStopFinderPort;
pub use stop_finder_port::StopFinderPort;
