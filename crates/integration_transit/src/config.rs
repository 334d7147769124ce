//! Transit service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the MBTA v3 stops API
#[derive(Clone, Serialize, Deserialize)]
pub struct MbtaConfig {
    /// Base URL for the MBTA v3 API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `api_key` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional search radius in degrees (`filter[radius]`); the API default applies when unset
    #[serde(default)]
    pub search_radius: Option<f64>,
}

impl std::fmt::Debug for MbtaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MbtaConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("search_radius", &self.search_radius)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api-v3.mbta.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            search_radius: None,
        }
    }
}

impl MbtaConfig {
    /// Default configuration with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err("api_key must be set".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if let Some(radius) = self.search_radius {
            if !radius.is_finite() || radius <= 0.0 {
                return Err("search_radius must be a positive number of degrees".to_string());
            }
        }

        Ok(())
    }
}
