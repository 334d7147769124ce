//! Place query value object
//!
//! The free-text place description a caller wants located, e.g.
//! `"Boston Common"` or `"Harvard Square, Cambridge MA"`.
//!
//! # Examples
//!
//! ```
//! use domain::PlaceQuery;
//!
//! let query = PlaceQuery::new("  Boston Common ").unwrap();
//! assert_eq!(query.as_str(), "Boston Common");
//!
//! assert!(PlaceQuery::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A non-empty, trimmed place description
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceQuery {
    #[validate(length(min = 1, message = "place query must not be empty"))]
    value: String,
}

impl PlaceQuery {
    /// Create a new place query, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns an error if the query is empty after trimming.
    pub fn new(query: impl AsRef<str>) -> Result<Self, DomainError> {
        let candidate = Self {
            value: query.as_ref().trim().to_string(),
        };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidPlaceQuery(e.to_string()))?;

        Ok(candidate)
    }

    /// Get the query text
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for PlaceQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PlaceQuery {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlaceQuery> for String {
    fn from(query: PlaceQuery) -> Self {
        query.value
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn blank_queries_are_rejected(ws in "\\s{0,10}") {
            prop_assert!(PlaceQuery::new(&ws).is_err());
        }

        #[test]
        fn queries_never_keep_outer_whitespace(
            ws_before in "\\s{0,3}",
            text in "[A-Za-z0-9][A-Za-z0-9 ,]{0,20}[A-Za-z0-9]",
            ws_after in "\\s{0,3}"
        ) {
            let query = PlaceQuery::new(format!("{ws_before}{text}{ws_after}")).unwrap();
            prop_assert_eq!(query.as_str(), text.as_str());
        }
    }
}
