//! Point-of-interest descriptor

use serde::{Deserialize, Serialize};

/// A nearby place (restaurant, cafe, ...) as reported by the places service
///
/// Every field is optional: whatever the upstream omitted stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Place name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Average rating (typically 0-5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Phone number as displayed upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Place {
    /// Create a place with only a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the rating
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the phone number
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let place = Place::named("Sam La Grassa's")
            .with_rating(4.7)
            .with_address("44 Province St, Boston, MA 02108")
            .with_phone("(617) 357-6861");

        assert_eq!(place.name.as_deref(), Some("Sam La Grassa's"));
        assert_eq!(place.rating, Some(4.7));
        assert!(place.address.as_deref().unwrap().contains("Province"));
        assert_eq!(place.phone.as_deref(), Some("(617) 357-6861"));
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let place = Place::named("Tatte");
        let json = serde_json::to_string(&place).unwrap();
        assert_eq!(json, r#"{"name":"Tatte"}"#);
    }

    #[test]
    fn absent_fields_deserialize_as_none() {
        let place: Place = serde_json::from_str(r#"{"rating": 4.2}"#).unwrap();
        assert!(place.name.is_none());
        assert_eq!(place.rating, Some(4.2));
        assert!(place.address.is_none());
        assert!(place.phone.is_none());
    }
}
