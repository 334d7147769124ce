//! Transit stop descriptor

use std::fmt;

use serde::{Deserialize, Serialize};

/// The nearest public-transit stop to a located place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitStop {
    /// Display name of the stop (e.g., "Park Street")
    pub name: String,
    /// Whether the stop is known to support wheelchair boarding
    pub wheelchair_accessible: bool,
}

impl TransitStop {
    /// Create a new stop descriptor
    #[must_use]
    pub fn new(name: impl Into<String>, wheelchair_accessible: bool) -> Self {
        Self {
            name: name.into(),
            wheelchair_accessible,
        }
    }
}

impl fmt::Display for TransitStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = if self.wheelchair_accessible {
            "wheelchair accessible"
        } else {
            "not known to be wheelchair accessible"
        };
        write!(f, "{} ({access})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_accessibility() {
        let stop = TransitStop::new("Park Street", true);
        assert_eq!(stop.to_string(), "Park Street (wheelchair accessible)");

        let stop = TransitStop::new("Boylston", false);
        assert!(stop.to_string().contains("not known"));
    }

    #[test]
    fn serialization_uses_snake_case_fields() {
        let stop = TransitStop::new("Park Street", true);
        let json = serde_json::to_value(&stop).unwrap();
        assert_eq!(json["name"], "Park Street");
        assert_eq!(json["wheelchair_accessible"], true);
    }
}
