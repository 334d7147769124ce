//! Places search data models

use serde::{Deserialize, Serialize};

/// A single local result from the Google Maps engine
///
/// Only the fields StopFinder surfaces are kept; all of them may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocalResult {
    /// Position in the upstream result list (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// Place name (`title` upstream)
    #[serde(default, rename = "title", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Average rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_result_parsing() {
        let json = r#"{
            "position": 1,
            "title": "Sam La Grassa's",
            "rating": 4.7,
            "reviews": 1834,
            "address": "44 Province St, Boston, MA 02108",
            "phone": "(617) 357-6861",
            "type": "Sandwich shop"
        }"#;
        let result: LocalResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.position, Some(1));
        assert_eq!(result.name.as_deref(), Some("Sam La Grassa's"));
        assert_eq!(result.rating, Some(4.7));
        assert_eq!(result.phone.as_deref(), Some("(617) 357-6861"));
    }

    #[test]
    fn test_local_result_missing_fields() {
        let result: LocalResult = serde_json::from_str(r#"{ "title": "Tatte" }"#).unwrap();
        assert_eq!(result.name.as_deref(), Some("Tatte"));
        assert!(result.rating.is_none());
        assert!(result.address.is_none());
        assert!(result.phone.is_none());
    }
}
