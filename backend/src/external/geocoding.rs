//! Geocoding API client
//!
//! Integrates with the OpenCage forward geocoding API

use reqwest::Client;
use serde::Deserialize;
use shared::{validate_coordinates, Coordinates};
use std::time::Duration;

use super::{describe_failure, http_client};
use crate::error::{AppError, AppResult};

/// OpenCage geocoding client
#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenCage API response
#[derive(Debug, Deserialize)]
struct OCResponse {
    #[serde(default)]
    results: Vec<OCResult>,
}

#[derive(Debug, Deserialize)]
struct OCResult {
    geometry: OCGeometry,
}

#[derive(Debug, Deserialize)]
struct OCGeometry {
    lat: f64,
    lng: f64,
}

impl GeocodingClient {
    /// Create a new GeocodingClient against the given base URL
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Resolve a city and region to the coordinates of the best match
    pub async fn forward_geocode(&self, city: &str, state: &str) -> AppResult<Coordinates> {
        let url = format!("{}/json", self.base_url);
        let query = format!("{},{}", city, state);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::GeocodingError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::GeocodingError(describe_failure(response).await));
        }

        let data: OCResponse = response
            .json()
            .await
            .map_err(|e| AppError::GeocodingError(format!("Failed to parse response: {}", e)))?;

        let geometry = data
            .results
            .into_iter()
            .next()
            .map(|r| r.geometry)
            .ok_or_else(|| AppError::GeocodingError(format!("No results for '{}'", query)))?;

        let coords = Coordinates::new(geometry.lat, geometry.lng);
        validate_coordinates(&coords).map_err(|e| AppError::GeocodingError(e.to_string()))?;

        Ok(coords)
    }
}
