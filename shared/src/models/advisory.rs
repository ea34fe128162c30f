//! Advisory request and response models

use serde::{Deserialize, Serialize};

use crate::models::{SoilSample, WeatherSnapshot};

/// Question submitted by a farmer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceRequest {
    pub email: String,
    pub question: String,
}

/// Advice returned to the client, with the data it was based on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    pub answer: String,
    pub soil: SoilSample,
    pub weather: WeatherSnapshot,
}
