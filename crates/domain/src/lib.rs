//! Domain layer for StopFinder
//!
//! Contains the value objects that flow through the locate pipeline:
//! the caller's place query, coordinates, transit stops, and places.
//! This layer performs no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
