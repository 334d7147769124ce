//! MBTA transit client via the v3 API
//!
//! Provides distance-sorted stop lookup using the public
//! [api-v3.mbta.com](https://api-v3.mbta.com) `/stops` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::MbtaConfig;
use crate::error::TransitError;
use crate::models::{Stop, WheelchairBoarding};

/// Trait for transit service clients
#[async_trait]
pub trait TransitClient: Send + Sync {
    /// Find stops around a set of coordinates, nearest first
    async fn find_stops_by_distance(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Stop>, TransitError>;

    /// Find the single nearest stop, or `None` when the service reports no stops
    async fn nearest_stop(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Stop>, TransitError> {
        let stops = self.find_stops_by_distance(latitude, longitude).await?;
        Ok(stops.into_iter().next())
    }
}

/// MBTA-based transit client using the v3 API
pub struct MbtaTransitClient {
    client: Client,
    config: MbtaConfig,
    api_key: String,
}

impl std::fmt::Debug for MbtaTransitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MbtaTransitClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MbtaTransitClient {
    /// Create a new MBTA transit client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot be initialized.
    pub fn new(config: &MbtaConfig) -> Result<Self, TransitError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TransitError::ConfigurationError("MBTA API key is required".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("StopFinder/0.1")
            .build()
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Build the `/stops` query parameters for a distance-sorted search
    fn stop_params(
        &self,
        latitude: f64,
        longitude: f64,
        page_limit: Option<usize>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("filter[latitude]", latitude.to_string()),
            ("filter[longitude]", longitude.to_string()),
            ("sort", "distance".to_string()),
        ];

        if let Some(radius) = self.config.search_radius {
            params.push(("filter[radius]", radius.to_string()));
        }
        if let Some(limit) = page_limit {
            params.push(("page[limit]", limit.to_string()));
        }

        params
    }

    /// Parse the raw JSON:API stops response into typed stops
    fn parse_stops_response(body: &str) -> Result<Vec<Stop>, TransitError> {
        let raw: RawStopsResponse =
            serde_json::from_str(body).map_err(|e| TransitError::ParseError(e.to_string()))?;

        Ok(raw.data.into_iter().map(Self::convert_stop).collect())
    }

    /// Parse only the first stop resource; later records are never inspected
    fn parse_nearest_stop(body: &str) -> Result<Option<Stop>, TransitError> {
        let page: RawStopsPage =
            serde_json::from_str(body).map_err(|e| TransitError::ParseError(e.to_string()))?;

        page.data
            .into_iter()
            .next()
            .map(|first| {
                serde_json::from_value::<RawStop>(first)
                    .map(Self::convert_stop)
                    .map_err(|e| TransitError::ParseError(e.to_string()))
            })
            .transpose()
    }

    /// Convert a raw stop resource to a typed stop
    fn convert_stop(raw: RawStop) -> Stop {
        let attributes = raw.attributes;
        Stop {
            id: raw.id.unwrap_or_default(),
            name: attributes.name,
            latitude: attributes.latitude,
            longitude: attributes.longitude,
            wheelchair_boarding: attributes
                .wheelchair_boarding
                .map_or(WheelchairBoarding::NoInformation, WheelchairBoarding::from),
        }
    }
}

impl MbtaTransitClient {
    /// Send one `/stops` request and return the response body
    async fn fetch_stops(
        &self,
        latitude: f64,
        longitude: f64,
        page_limit: Option<usize>,
    ) -> Result<String, TransitError> {
        let url = format!("{}/stops", self.config.base_url);
        let params = self.stop_params(latitude, longitude, page_limit);

        debug!(?url, ?page_limit, "Searching stops by distance");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransitError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TransitError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransitError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(TransitError::AuthenticationFailed(format!(
                "MBTA API rejected the API key (HTTP {status})"
            )));
        }

        if !status.is_success() {
            return Err(TransitError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| TransitError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl TransitClient for MbtaTransitClient {
    #[instrument(skip(self))]
    async fn find_stops_by_distance(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Stop>, TransitError> {
        let body = self.fetch_stops(latitude, longitude, None).await?;
        let stops = Self::parse_stops_response(&body)?;

        if stops.is_empty() {
            warn!("No stops found near coordinates");
        }

        debug!(count = stops.len(), "Stops found");
        Ok(stops)
    }

    /// Requests a single-record page, matching the first-result policy
    #[instrument(skip(self))]
    async fn nearest_stop(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Stop>, TransitError> {
        let body = self.fetch_stops(latitude, longitude, Some(1)).await?;
        let stop = Self::parse_nearest_stop(&body)?;

        if stop.is_none() {
            warn!("No stops found near coordinates");
        }
        Ok(stop)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawStopsPage {
    data: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawStopsResponse {
    data: Vec<RawStop>,
}

#[derive(Debug, Deserialize)]
struct RawStop {
    id: Option<String>,
    attributes: RawStopAttributes,
}

#[derive(Debug, Deserialize)]
struct RawStopAttributes {
    name: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    wheelchair_boarding: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stops_response() {
        let json = r#"{
            "data": [
                {
                    "id": "place-pktrm",
                    "type": "stop",
                    "attributes": {
                        "name": "Park Street",
                        "latitude": 42.356395,
                        "longitude": -71.062424,
                        "wheelchair_boarding": 1
                    }
                },
                {
                    "id": "place-boyls",
                    "type": "stop",
                    "attributes": {
                        "name": "Boylston",
                        "latitude": 42.35302,
                        "longitude": -71.06459,
                        "wheelchair_boarding": 2
                    }
                }
            ],
            "jsonapi": { "version": "1.0" }
        }"#;

        let stops = MbtaTransitClient::parse_stops_response(json).unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].id, "place-pktrm");
        assert_eq!(stops[0].name, "Park Street");
        assert!(stops[0].is_wheelchair_accessible());
        assert_eq!(stops[1].name, "Boylston");
        assert!(!stops[1].is_wheelchair_accessible());
        assert!((stops[0].latitude.unwrap() - 42.356_395).abs() < 0.000_1);
    }

    #[test]
    fn test_parse_missing_boarding_code() {
        let json = r#"{ "data": [{ "id": "1", "attributes": { "name": "Tremont St @ Boylston St" } }] }"#;
        let stops = MbtaTransitClient::parse_stops_response(json).unwrap();
        assert_eq!(stops[0].wheelchair_boarding, WheelchairBoarding::NoInformation);
        assert!(!stops[0].is_wheelchair_accessible());
    }

    #[test]
    fn test_parse_empty_stops() {
        let stops = MbtaTransitClient::parse_stops_response(r#"{ "data": [] }"#).unwrap();
        assert!(stops.is_empty());
    }

    #[test]
    fn test_parse_missing_data_is_error() {
        let result = MbtaTransitClient::parse_stops_response(r#"{ "jsonapi": {} }"#);
        assert!(matches!(result, Err(TransitError::ParseError(_))));
    }

    #[test]
    fn test_parse_missing_name_is_error() {
        let json = r#"{ "data": [{ "id": "1", "attributes": { "wheelchair_boarding": 1 } }] }"#;
        assert!(MbtaTransitClient::parse_stops_response(json).is_err());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = MbtaTransitClient::parse_stops_response("not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_requires_api_key() {
        let result = MbtaTransitClient::new(&MbtaConfig::default());
        assert!(matches!(result, Err(TransitError::ConfigurationError(_))));
    }

    #[test]
    fn test_stop_params() {
        let client = MbtaTransitClient::new(&MbtaConfig::for_testing()).unwrap();
        let params = client.stop_params(42.3554, -71.0655, None);
        assert!(params.contains(&("api_key", "test-key".to_string())));
        assert!(params.contains(&("filter[latitude]", "42.3554".to_string())));
        assert!(params.contains(&("filter[longitude]", "-71.0655".to_string())));
        assert!(params.contains(&("sort", "distance".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "filter[radius]"));
        assert!(!params.iter().any(|(k, _)| *k == "page[limit]"));
    }

    #[test]
    fn test_stop_params_with_page_limit() {
        let client = MbtaTransitClient::new(&MbtaConfig::for_testing()).unwrap();
        let params = client.stop_params(42.3554, -71.0655, Some(1));
        assert!(params.contains(&("page[limit]", "1".to_string())));
    }

    #[test]
    fn test_parse_nearest_ignores_later_records() {
        let json = r#"{
            "data": [
                { "id": "place-pktrm", "attributes": { "name": "Park Street", "wheelchair_boarding": 1 } },
                { "id": "broken", "attributes": { "wheelchair_boarding": "yes" } }
            ]
        }"#;
        let stop = MbtaTransitClient::parse_nearest_stop(json).unwrap().unwrap();
        assert_eq!(stop.name, "Park Street");
        assert!(stop.is_wheelchair_accessible());
    }

    #[test]
    fn test_parse_nearest_empty_is_none() {
        let stop = MbtaTransitClient::parse_nearest_stop(r#"{ "data": [] }"#).unwrap();
        assert!(stop.is_none());
    }

    #[test]
    fn test_parse_nearest_malformed_first_record_is_error() {
        let json = r#"{ "data": [{ "id": "1", "attributes": { "wheelchair_boarding": 1 } }] }"#;
        let result = MbtaTransitClient::parse_nearest_stop(json);
        assert!(matches!(result, Err(TransitError::ParseError(_))));
    }

    #[test]
    fn test_stop_params_with_radius() {
        let config = MbtaConfig {
            search_radius: Some(0.02),
            ..MbtaConfig::for_testing()
        };
        let client = MbtaTransitClient::new(&config).unwrap();
        let params = client.stop_params(42.3554, -71.0655, None);
        assert!(params.contains(&("filter[radius]", "0.02".to_string())));
    }
}
