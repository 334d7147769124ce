//! Application-level errors

use std::fmt;

use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// External collaborator consulted by the locate pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collaborator {
    /// Place name to coordinates
    Geocoder,
    /// Coordinates to nearest transit stop
    StopFinder,
    /// Coordinates to nearby places
    PlacesSearch,
}

impl Collaborator {
    /// Human-readable name used in messages and logs
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Geocoder => "geocoder",
            Self::StopFinder => "stop finder",
            Self::PlacesSearch => "places search",
        }
    }
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur in the application layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// The caller supplied unusable input (e.g. a blank place name)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The geocoder returned no candidates for the query
    #[error("Not found: {0}")]
    NotFound(String),

    /// A collaborator failed (transport, status, or response shape)
    #[error("{collaborator} error: {cause}")]
    Upstream {
        /// Which collaborator failed
        collaborator: Collaborator,
        /// Description of the failure
        cause: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Create an upstream error for a collaborator
    pub fn upstream(collaborator: Collaborator, cause: impl Into<String>) -> Self {
        Self::Upstream {
            collaborator,
            cause: cause.into(),
        }
    }

    /// The collaborator responsible for this error, if any
    #[must_use]
    pub const fn collaborator(&self) -> Option<Collaborator> {
        match self {
            Self::Upstream { collaborator, .. } => Some(*collaborator),
            _ => None,
        }
    }

    /// Render a message suitable for showing to the end user
    ///
    /// Each failure kind gets its own wording so "nothing matched" is never
    /// confused with "a service is down".
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(detail) => format!("Please enter a place name ({detail})."),
            Self::NotFound(query) => format!("Could not resolve location \"{query}\"."),
            Self::Upstream {
                collaborator,
                cause,
            } => format!("The {collaborator} service is unavailable right now: {cause}"),
            Self::Configuration(detail) => format!("StopFinder is misconfigured: {detail}"),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
