//! Collaborator configurations: geocoding (Mapbox), transit (MBTA), places (SerpAPI).

use integration_places::SerpApiConfig;
use integration_transit::{MapboxConfig, MbtaConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Expose an optional secret as a plain string for an integration client
fn expose(secret: Option<&SecretString>) -> Option<String> {
    secret.map(|s| s.expose_secret().to_string())
}

/// Redaction marker for optional secrets in `Debug` output
fn redacted(secret: Option<&SecretString>) -> Option<&'static str> {
    secret.map(|_| "[REDACTED]")
}

// ==============================
// Geocoding Configuration
// ==============================

/// Mapbox Search Box geocoding configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Mapbox API base URL
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout")]
    pub timeout_secs: u64,

    /// Mapbox access token (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,
}

impl std::fmt::Debug for GeocodingAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAppConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("access_token", &redacted(self.access_token.as_ref()))
            .finish()
    }
}

fn default_geocoding_base_url() -> String {
    MapboxConfig::default().base_url
}

fn default_geocoding_timeout() -> u64 {
    MapboxConfig::default().timeout_secs
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout(),
            access_token: None,
        }
    }
}

impl GeocodingAppConfig {
    /// Convert to `integration_transit`'s `MapboxConfig`
    #[must_use]
    pub fn to_mapbox_config(&self) -> MapboxConfig {
        MapboxConfig {
            base_url: self.base_url.clone(),
            access_token: expose(self.access_token.as_ref()),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Transit Configuration
// ==============================

/// MBTA v3 API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct TransitAppConfig {
    /// MBTA API base URL
    #[serde(default = "default_transit_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_transit_timeout")]
    pub timeout_secs: u64,

    /// MBTA API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Optional `filter[radius]` in degrees; unset leaves the service default
    #[serde(default)]
    pub search_radius: Option<f64>,
}

impl std::fmt::Debug for TransitAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitAppConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &redacted(self.api_key.as_ref()))
            .field("search_radius", &self.search_radius)
            .finish()
    }
}

fn default_transit_base_url() -> String {
    MbtaConfig::default().base_url
}

fn default_transit_timeout() -> u64 {
    MbtaConfig::default().timeout_secs
}

impl Default for TransitAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_transit_base_url(),
            timeout_secs: default_transit_timeout(),
            api_key: None,
            search_radius: None,
        }
    }
}

impl TransitAppConfig {
    /// Convert to `integration_transit`'s `MbtaConfig`
    #[must_use]
    pub fn to_mbta_config(&self) -> MbtaConfig {
        MbtaConfig {
            base_url: self.base_url.clone(),
            api_key: expose(self.api_key.as_ref()),
            timeout_secs: self.timeout_secs,
            search_radius: self.search_radius,
        }
    }
}

// ==============================
// Places Configuration
// ==============================

/// SerpAPI Google Maps configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct PlacesAppConfig {
    /// SerpAPI base URL
    #[serde(default = "default_places_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_places_timeout")]
    pub timeout_secs: u64,

    /// SerpAPI key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Map zoom level for the search area (3-21, default 15)
    #[serde(default = "default_places_zoom")]
    pub zoom: u8,
}

impl std::fmt::Debug for PlacesAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesAppConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &redacted(self.api_key.as_ref()))
            .field("zoom", &self.zoom)
            .finish()
    }
}

fn default_places_base_url() -> String {
    SerpApiConfig::default().base_url
}

fn default_places_timeout() -> u64 {
    SerpApiConfig::default().timeout_secs
}

fn default_places_zoom() -> u8 {
    SerpApiConfig::default().zoom
}

impl Default for PlacesAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_places_base_url(),
            timeout_secs: default_places_timeout(),
            api_key: None,
            zoom: default_places_zoom(),
        }
    }
}

impl PlacesAppConfig {
    /// Convert to `integration_places`' `SerpApiConfig`
    #[must_use]
    pub fn to_serpapi_config(&self) -> SerpApiConfig {
        SerpApiConfig {
            base_url: self.base_url.clone(),
            api_key: expose(self.api_key.as_ref()),
            timeout_secs: self.timeout_secs,
            zoom: self.zoom,
        }
    }
}
