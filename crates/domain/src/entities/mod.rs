//! Domain entities - Descriptors returned by the upstream collaborators

mod place;
mod transit_stop;

pub use place::Place;
pub use transit_stop::TransitStop;
