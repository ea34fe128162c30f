//! Advisory generation via the language model

use shared::{FarmerProfile, SoilSample, WeatherSnapshot};

use crate::config::Config;
use crate::error::AppResult;
use crate::external::{ChatCompletionsClient, ChatMessage};

/// Build the system prompt describing the farmer's situation
pub fn compose_system_prompt(
    farmer: &FarmerProfile,
    soil: &SoilSample,
    weather: &WeatherSnapshot,
) -> String {
    format!(
        "You are an AI assistant for a farmer.\n\
         Farmer is located in {city}, {state}, growing {crop}.\n\
         Current weather: Temperature {temp}°C, {description}, Humidity {humidity}%.\n\
         Soil data: Soil type {soil_type}, pH {ph}, Organic Carbon {carbon}.\n\
         Answer in English and give practical farming advice based on location, soil, weather, and crop type.",
        city = farmer.city,
        state = farmer.state,
        crop = farmer.crop,
        temp = weather.temp,
        description = weather.description,
        humidity = weather.humidity,
        soil_type = soil.soil_type,
        ph = soil.ph,
        carbon = soil.organic_carbon,
    )
}

/// Asks the language model for farming advice
#[derive(Clone)]
pub struct AdvisorClient {
    llm: ChatCompletionsClient,
}

impl AdvisorClient {
    pub fn new(llm: ChatCompletionsClient) -> Self {
        Self { llm }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ChatCompletionsClient::new(
            config.llm.api_endpoint.clone(),
            config.llm.api_key.clone(),
            config.llm.model.clone(),
            config.llm.timeout(),
        ))
    }

    /// Answer a question in the context of the farmer's location, soil and weather
    pub async fn advise(
        &self,
        farmer: &FarmerProfile,
        soil: &SoilSample,
        weather: &WeatherSnapshot,
        question: &str,
    ) -> AppResult<String> {
        let messages = [
            ChatMessage::system(compose_system_prompt(farmer, soil, weather)),
            ChatMessage::user(question),
        ];

        tracing::debug!(model = self.llm.model(), "Requesting advisory");
        self.llm.complete(&messages).await
    }
}
