//! Weather data models

use serde::{Deserialize, Serialize};

/// Current conditions at a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    /// Air temperature in °C
    pub temp: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    pub description: String,
}

impl WeatherSnapshot {
    /// Clear, warm day, substituted when the weather service is unavailable
    pub fn fallback() -> Self {
        Self {
            temp: 30.0,
            humidity: 50.0,
            description: "Clear".to_string(),
        }
    }
}
