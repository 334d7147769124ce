//! Tracing subscriber setup
//!
//! Logs go to stderr so machine-readable output on stdout stays clean.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when neither `RUST_LOG` nor `-v` is given
    /// (e.g. "warn", "stopfinder=debug,reqwest=info")
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Error type for tracing initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// The rejected directive
        directive: String,
        /// Parser message
        reason: String,
    },

    /// Failed to install the global subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Determine the filter directive from verbosity count and config
///
/// Any `-v` flag overrides the configured level.
#[must_use]
pub fn filter_directive(config: &LoggingConfig, verbosity: u8) -> String {
    match verbosity {
        0 => config.level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise [`filter_directive`] decides.
pub fn init_tracing(config: &LoggingConfig, verbosity: u8) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = filter_directive(config, verbosity);
            EnvFilter::try_new(&directive).map_err(|e| TelemetryError::InvalidFilter {
                directive,
                reason: e.to_string(),
            })?
        },
    };

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_warn() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert!(!config.json);
    }

    #[test]
    fn verbosity_overrides_config_level() {
        let config = LoggingConfig {
            level: "error".to_string(),
            json: false,
        };
        assert_eq!(filter_directive(&config, 0), "error");
        assert_eq!(filter_directive(&config, 1), "info");
        assert_eq!(filter_directive(&config, 2), "debug");
        assert_eq!(filter_directive(&config, 3), "trace");
        assert_eq!(filter_directive(&config, 10), "trace");
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert_eq!(config.level, "warn");
        assert!(config.json);
    }
}
