//! Application configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: Mapbox geocoding, MBTA transit, SerpAPI places
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml`, `STOPFINDER__SECTION__KEY` environment variables, and
//! finally the bare credential variables (`MAPBOX_TOKEN`, `MBTA_API_KEY`,
//! `SERPAPI_API_KEY`) for any credential still unset.

mod integrations;

use std::path::Path;

use application::{ApplicationError, LocatorOptions};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use integrations::{GeocodingAppConfig, PlacesAppConfig, TransitAppConfig};

use crate::telemetry::LoggingConfig;

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "STOPFINDER";

/// Mapbox access token variable
pub const MAPBOX_TOKEN_VAR: &str = "MAPBOX_TOKEN";

/// MBTA API key variable
pub const MBTA_API_KEY_VAR: &str = "MBTA_API_KEY";

/// SerpAPI key variable
pub const SERPAPI_API_KEY_VAR: &str = "SERPAPI_API_KEY";

/// Locator defaults for the places step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatorAppConfig {
    /// Places category searched around the located place
    #[serde(default = "default_category")]
    pub category: String,

    /// Maximum number of places per report
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_category() -> String {
    application::DEFAULT_CATEGORY.to_string()
}

const fn default_limit() -> usize {
    application::DEFAULT_LIMIT
}

impl Default for LocatorAppConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            limit: default_limit(),
        }
    }
}

impl LocatorAppConfig {
    /// Convert to the service options
    #[must_use]
    pub fn to_options(&self) -> LocatorOptions {
        LocatorOptions::new(self.category.clone(), self.limit)
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geocoder (Mapbox) configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// Stop finder (MBTA) configuration
    #[serde(default)]
    pub transit: TransitAppConfig,

    /// Places search (SerpAPI) configuration
    #[serde(default)]
    pub places: PlacesAppConfig,

    /// Locator defaults
    #[serde(default)]
    pub locator: LocatorAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `./config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (required) or `./config.toml`
    ///
    /// Bare credential variables are applied after the structured sources.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut config = Self::from_sources(path)?;
        config.apply_credential_fallbacks(|name| std::env::var(name).ok());
        Ok(config)
    }

    fn from_sources(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., STOPFINDER__PLACES__ZOOM)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Fill unset credentials from bare variables
    ///
    /// Only populates fields that are currently empty/None; values from the
    /// config file or `STOPFINDER__*` variables always win.
    pub fn apply_credential_fallbacks<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fill = |slot: &mut Option<SecretString>, var: &str| {
            if slot.as_ref().is_some_and(|s| !s.expose_secret().is_empty()) {
                return;
            }
            if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
                *slot = Some(SecretString::from(value));
                debug!(variable = var, "Loaded credential from environment");
            }
        };

        fill(&mut self.geocoding.access_token, MAPBOX_TOKEN_VAR);
        fill(&mut self.transit.api_key, MBTA_API_KEY_VAR);
        fill(&mut self.places.api_key, SERPAPI_API_KEY_VAR);
    }

    /// Which credentials are present, keyed by their variable name
    #[must_use]
    pub fn credential_status(&self) -> [(&'static str, bool); 3] {
        let present = |s: Option<&SecretString>| s.is_some_and(|s| !s.expose_secret().is_empty());
        [
            (MAPBOX_TOKEN_VAR, present(self.geocoding.access_token.as_ref())),
            (MBTA_API_KEY_VAR, present(self.transit.api_key.as_ref())),
            (SERPAPI_API_KEY_VAR, present(self.places.api_key.as_ref())),
        ]
    }

    /// Validate the configuration, returning the first problem found
    pub fn validate(&self) -> Result<(), ApplicationError> {
        for (var, present) in self.credential_status() {
            if !present {
                return Err(ApplicationError::Configuration(format!(
                    "{var} is not set"
                )));
            }
        }

        self.geocoding
            .to_mapbox_config()
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("geocoding: {e}")))?;
        self.transit
            .to_mbta_config()
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("transit: {e}")))?;
        self.places
            .to_serpapi_config()
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("places: {e}")))?;

        if self.locator.category.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "locator: category must not be empty".to_string(),
            ));
        }
        if self.locator.limit == 0 {
            return Err(ApplicationError::Configuration(
                "locator: limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
