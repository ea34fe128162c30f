//! Soil API client
//!
//! Integrates with the ISRIC SoilGrids point query API

use reqwest::Client;
use serde::Deserialize;
use shared::{Coordinates, Measurement, SoilSample};
use std::time::Duration;

use super::{describe_failure, http_client};
use crate::error::{AppError, AppResult};

/// Label used when the service omits the soil classification
const UNKNOWN_SOIL_TYPE: &str = "Unknown";

/// SoilGrids client
#[derive(Clone)]
pub struct SoilGridsClient {
    client: Client,
    base_url: String,
}

/// SoilGrids point query response
#[derive(Debug, Deserialize)]
struct SGResponse {
    #[serde(default)]
    soil: Vec<SGSoilClass>,
    phh2o: Option<SGProperty>,
    organiccarbon: Option<SGProperty>,
}

#[derive(Debug, Deserialize)]
struct SGSoilClass {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SGProperty {
    #[serde(default)]
    mean: Vec<Option<f64>>,
}

impl SGProperty {
    fn first_mean(&self) -> Option<f64> {
        self.mean.first().copied().flatten()
    }
}

impl SoilGridsClient {
    /// Create a new SoilGridsClient against the given base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            base_url: base_url.into(),
        }
    }

    /// Fetch topsoil properties at the given coordinates
    pub async fn get_soil(&self, coords: Coordinates) -> AppResult<SoilSample> {
        let url = format!("{}/query", self.base_url);
        let lat = coords.lat.to_string();
        let lon = coords.lng.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("lat", lat.as_str()), ("lon", lon.as_str())])
            .send()
            .await
            .map_err(|e| AppError::SoilError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::SoilError(describe_failure(response).await));
        }

        let data: SGResponse = response
            .json()
            .await
            .map_err(|e| AppError::SoilError(format!("Failed to parse response: {}", e)))?;

        Ok(convert_response(data))
    }
}

/// Take the first reported value of each property
fn convert_response(data: SGResponse) -> SoilSample {
    let soil_type = data
        .soil
        .into_iter()
        .next()
        .and_then(|class| class.name)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_SOIL_TYPE.to_string());

    SoilSample {
        soil_type,
        ph: Measurement::from(data.phh2o.as_ref().and_then(SGProperty::first_mean)),
        organic_carbon: Measurement::from(
            data.organiccarbon.as_ref().and_then(SGProperty::first_mean),
        ),
    }
}
