//! Forward-geocoding passthrough
//!
//! Thin wrapper over the third-party mapping API: one GET per lookup,
//! first hit wins, an empty result set is `None` rather than an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use error_types::{ClientError, Result};

/// Mapping API configuration
#[derive(Debug, Clone)]
pub struct GeoConfig {
    pub base_url: String,
    pub api_key: String,
}

impl GeoConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("UPLIFT_GEO_URL")
                .unwrap_or_else(|_| "https://geocode.maps.example".to_string()),
            api_key: std::env::var("UPLIFT_GEO_KEY").unwrap_or_default(),
        }
    }
}

/// A geographic coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForwardResponse {
    #[serde(default)]
    results: Vec<ForwardHit>,
}

#[derive(Debug, Deserialize)]
struct ForwardHit {
    lat: f64,
    lng: f64,
}

/// Parse the provider's forward-geocoding response body
///
/// Returns the first hit, or `None` when the provider found nothing.
pub fn parse_forward_response(body: &str) -> Result<Option<Coordinates>> {
    let response: ForwardResponse = serde_json::from_str(body)?;
    Ok(response.results.first().map(|hit| Coordinates {
        latitude: hit.lat,
        longitude: hit.lng,
    }))
}

/// Forward-geocoding client
#[derive(Clone)]
pub struct GeoClient {
    client: reqwest::Client,
    config: GeoConfig,
}

impl GeoClient {
    pub fn new(config: GeoConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Lookup URL for an address
    fn lookup_url(&self, address: &str) -> String {
        format!(
            "{}/forward?q={}&key={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(address),
            self.config.api_key
        )
    }

    /// Resolve an address to coordinates, if the provider knows it
    pub async fn forward_geocode(&self, address: &str) -> Result<Option<Coordinates>> {
        let url = self.lookup_url(address);
        debug!(%address, "forward geocoding");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("geocoding request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(%address, status = status.as_u16(), "geocoding lookup failed");
            return Err(ClientError::from_status(status.as_u16(), message));
        }

        let body = response.text().await?;
        parse_forward_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_takes_the_first_hit() {
        let body = r#"{"results":[{"lat":44.97,"lng":-93.26},{"lat":45.0,"lng":-93.0}]}"#;
        let coords = parse_forward_response(body).unwrap().unwrap();
        assert_eq!(coords.latitude, 44.97);
        assert_eq!(coords.longitude, -93.26);
    }

    #[test]
    fn test_parse_empty_results_is_none() {
        assert_eq!(parse_forward_response(r#"{"results":[]}"#).unwrap(), None);
        // Providers omit the array entirely for unknown addresses
        assert_eq!(parse_forward_response("{}").unwrap(), None);
    }

    #[test]
    fn test_parse_malformed_body_is_a_serialization_error() {
        let err = parse_forward_response("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[test]
    fn test_lookup_url_encodes_the_address() {
        let client = GeoClient::new(GeoConfig {
            base_url: "https://geocode.maps.example/".to_string(),
            api_key: "k123".to_string(),
        });
        let url = client.lookup_url("350 5th Ave, New York");
        assert_eq!(
            url,
            "https://geocode.maps.example/forward?q=350%205th%20Ave%2C%20New%20York&key=k123"
        );
    }
}
