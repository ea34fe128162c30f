//! Weather API client for fetching current conditions
//!
//! Integrates with OpenWeatherMap API

use reqwest::Client;
use serde::Deserialize;
use shared::{Coordinates, WeatherSnapshot};
use std::time::Duration;

use super::{describe_failure, http_client};
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    main: Option<OWMMain>,
    #[serde(default)]
    weather: Vec<OWMWeather>,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    description: Option<String>,
}

impl WeatherClient {
    /// Create a new WeatherClient against the given base URL
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current_weather(&self, coords: Coordinates) -> AppResult<WeatherSnapshot> {
        let url = format!("{}/weather", self.base_url);
        let lat = coords.lat.to_string();
        let lon = coords.lng.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::WeatherError(describe_failure(response).await));
        }

        let data: OWMCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherError(format!("Failed to parse weather response: {}", e)))?;

        Ok(convert_current_response(data))
    }
}

/// Convert OpenWeatherMap current response to our format
fn convert_current_response(data: OWMCurrentResponse) -> WeatherSnapshot {
    let main = data.main.as_ref();

    WeatherSnapshot {
        temp: main.and_then(|m| m.temp).unwrap_or(0.0),
        humidity: main.and_then(|m| m.humidity).unwrap_or(0.0),
        description: data
            .weather
            .into_iter()
            .next()
            .and_then(|w| w.description)
            .unwrap_or_else(|| "Unknown".to_string()),
    }
}
