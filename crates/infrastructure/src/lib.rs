//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! integration clients, loads configuration, and sets up tracing.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, GeocodingAppConfig, LocatorAppConfig, PlacesAppConfig, TransitAppConfig,
};
pub use telemetry::{LoggingConfig, TelemetryError, init_tracing};
