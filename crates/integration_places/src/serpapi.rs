//! SerpAPI Google Maps client
//!
//! Client for the SerpAPI Google Maps engine (<https://serpapi.com/google-maps-api>).

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::SerpApiConfig, error::PlacesError, models::LocalResult, provider::PlacesProvider,
};

/// SerpAPI response structures
mod api {
    use serde::Deserialize;

    use crate::models::LocalResult;

    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        /// Present when SerpAPI could not complete the search
        pub error: Option<String>,
        #[serde(default)]
        pub local_results: Vec<LocalResult>,
    }
}

/// SerpAPI Google Maps client
pub struct SerpApiClient {
    client: Client,
    api_key: String,
    base_url: String,
    zoom: u8,
    timeout_secs: u64,
}

impl std::fmt::Debug for SerpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiClient")
            .field("base_url", &self.base_url)
            .field("zoom", &self.zoom)
            .finish_non_exhaustive()
    }
}

impl SerpApiClient {
    /// Create a new SerpAPI client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or HTTP client cannot be created.
    pub fn new(config: &SerpApiConfig) -> Result<Self, PlacesError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                PlacesError::ConfigurationError("SerpAPI API key is required".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            zoom: config.zoom,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Format the `ll` map-center parameter: `@lat,lon,{zoom}z`
    fn map_center(&self, latitude: f64, longitude: f64) -> String {
        format!("@{latitude},{longitude},{}z", self.zoom)
    }

    /// Build the query parameters for a Google Maps local search
    fn search_params(&self, latitude: f64, longitude: f64, query: &str) -> Vec<(&'static str, String)> {
        vec![
            ("engine", "google_maps".to_string()),
            ("type", "search".to_string()),
            ("q", query.to_string()),
            ("ll", self.map_center(latitude, longitude)),
            ("api_key", self.api_key.clone()),
        ]
    }

    /// Extract the explicit error message from a response body, if any
    fn error_message(body: &str) -> Option<String> {
        serde_json::from_str::<api::SearchResponse>(body)
            .ok()
            .and_then(|r| r.error)
    }

    /// Parse a successful response body into at most `max_results` results
    ///
    /// An embedded `error` is reported as [`PlacesError::Api`] even when
    /// the HTTP status was 200.
    fn parse_search_response(body: &str, max_results: usize) -> Result<Vec<LocalResult>, PlacesError> {
        let response: api::SearchResponse =
            serde_json::from_str(body).map_err(|e| PlacesError::ParseError(e.to_string()))?;

        if let Some(error) = response.error {
            return Err(PlacesError::Api(error));
        }

        Ok(response
            .local_results
            .into_iter()
            .take(max_results)
            .collect())
    }
}

#[async_trait]
impl PlacesProvider for SerpApiClient {
    #[instrument(skip(self), fields(provider = "serpapi"))]
    async fn search_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<LocalResult>, PlacesError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(PlacesError::InvalidQuery(
                "Search category cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/search.json", self.base_url);
        let params = self.search_params(latitude, longitude, query);
        let start = Instant::now();

        debug!(url = %url, ll = %self.map_center(latitude, longitude), "Sending SerpAPI request");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlacesError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else if e.is_connect() {
                    PlacesError::ConnectionFailed(e.to_string())
                } else {
                    PlacesError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Received SerpAPI response");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse().ok());

            return Err(PlacesError::RateLimitExceeded {
                retry_after_secs: retry_after,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::ParseError(e.to_string()))?;

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(PlacesError::AuthenticationFailed(
                Self::error_message(&body).unwrap_or_else(|| "Invalid SerpAPI key".to_string()),
            ));
        }

        if !status.is_success() {
            let detail = Self::error_message(&body).unwrap_or(body);
            return Err(PlacesError::RequestFailed(format!("HTTP {status}: {detail}")));
        }

        let results = Self::parse_search_response(&body, max_results)?;

        debug!(
            results = results.len(),
            time_ms = start.elapsed().as_millis(),
            "SerpAPI search completed"
        );

        Ok(results)
    }

    fn provider_name(&self) -> &'static str {
        "serpapi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body(count: usize) -> String {
        let results: Vec<serde_json::Value> = (1..=count)
            .map(|i| {
                serde_json::json!({
                    "position": i,
                    "title": format!("Restaurant {i}"),
                    "rating": 4.0,
                    "address": format!("{i} Tremont St, Boston, MA"),
                })
            })
            .collect();
        serde_json::json!({
            "search_metadata": { "status": "Success" },
            "local_results": results,
        })
        .to_string()
    }

    #[test]
    fn test_map_center_format() {
        let client = SerpApiClient::new(&SerpApiConfig::for_testing()).unwrap();
        assert_eq!(client.map_center(42.3554, -71.0655), "@42.3554,-71.0655,15z");
    }

    #[test]
    fn test_search_params() {
        let client = SerpApiClient::new(&SerpApiConfig::for_testing()).unwrap();
        let params = client.search_params(42.3554, -71.0655, "restaurants");
        assert!(params.contains(&("engine", "google_maps".to_string())));
        assert!(params.contains(&("type", "search".to_string())));
        assert!(params.contains(&("q", "restaurants".to_string())));
        assert!(params.contains(&("api_key", "test-key".to_string())));
    }

    #[test]
    fn test_parse_truncates_in_order() {
        let results = SerpApiClient::parse_search_response(&sample_body(20), 9).unwrap();
        assert_eq!(results.len(), 9);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.name.as_deref(), Some(format!("Restaurant {}", i + 1).as_str()));
        }
    }

    #[test]
    fn test_parse_fewer_than_limit() {
        let results = SerpApiClient::parse_search_response(&sample_body(3), 9).unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_parse_missing_local_results_is_empty() {
        let results =
            SerpApiClient::parse_search_response(r#"{ "search_metadata": {} }"#, 9).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_embedded_error() {
        let body = r#"{ "error": "Google hasn't returned any results for this query." }"#;
        let result = SerpApiClient::parse_search_response(body, 9);
        assert!(matches!(result, Err(PlacesError::Api(msg)) if msg.contains("any results")));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = SerpApiClient::parse_search_response("not json", 9);
        assert!(matches!(result, Err(PlacesError::ParseError(_))));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            SerpApiClient::error_message(r#"{ "error": "Invalid API key." }"#).as_deref(),
            Some("Invalid API key.")
        );
        assert!(SerpApiClient::error_message("plain text").is_none());
    }

    #[test]
    fn test_new_requires_key() {
        let result = SerpApiClient::new(&SerpApiConfig::default());
        assert!(matches!(result, Err(PlacesError::ConfigurationError(_))));
    }
}
