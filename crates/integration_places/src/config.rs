//! Places search configuration

use serde::{Deserialize, Serialize};

/// Lowest zoom level accepted by the Google Maps engine
pub const MIN_ZOOM: u8 = 3;

/// Highest zoom level accepted by the Google Maps engine
pub const MAX_ZOOM: u8 = 21;

/// Configuration for the SerpAPI Google Maps search
#[derive(Clone, Serialize, Deserialize)]
pub struct SerpApiConfig {
    /// SerpAPI base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `api_key` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Map zoom level used for the `ll` parameter; 15 covers a walkable urban area
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl std::fmt::Debug for SerpApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("zoom", &self.zoom)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://serpapi.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_zoom() -> u8 {
    15
}

impl Default for SerpApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            zoom: default_zoom(),
        }
    }
}

impl SerpApiConfig {
    /// Default configuration with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Create a configuration for testing (dummy key, short timeout)
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

        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(format!("zoom must be between {MIN_ZOOM} and {MAX_ZOOM}"));
        }

        Ok(())
    }
}
