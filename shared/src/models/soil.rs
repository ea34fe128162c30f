//! Soil data models

use serde::{Deserialize, Serialize};

use crate::types::Measurement;

/// Topsoil properties at a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    pub soil_type: String,
    #[serde(rename = "pH")]
    pub ph: Measurement,
    pub organic_carbon: Measurement,
}

impl SoilSample {
    /// Typical loam profile, substituted when the soil service is unavailable
    pub fn fallback() -> Self {
        Self {
            soil_type: "Loam".to_string(),
            ph: Measurement::Value(6.5),
            organic_carbon: Measurement::Value(1.2),
        }
    }
}
