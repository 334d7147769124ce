//! Application layer - Use cases and orchestration
//!
//! Contains the locate pipeline, the ports it drives, and report formatting.
//! Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, Collaborator};
pub use ports::*;
pub use services::*;
