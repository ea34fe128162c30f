//! Advice orchestration
//!
//! Profile lookup, geocoding, soil and weather enrichment, then the
//! language model. Only the profile lookup and the language model can fail
//! a request.

use shared::{AdviceRequest, AdvisoryResponse};
use std::sync::Arc;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::advisor::AdvisorClient;
use crate::services::enrichment::{EnvironmentEnricher, GeoResolver};
use crate::services::farmer::FarmerRepository;

/// Answers farmer questions with location-aware advice
#[derive(Clone)]
pub struct AdviceService {
    farmers: Arc<dyn FarmerRepository>,
    geo: GeoResolver,
    environment: EnvironmentEnricher,
    advisor: AdvisorClient,
}

impl AdviceService {
    pub fn new(
        farmers: Arc<dyn FarmerRepository>,
        geo: GeoResolver,
        environment: EnvironmentEnricher,
        advisor: AdvisorClient,
    ) -> Self {
        Self {
            farmers,
            geo,
            environment,
            advisor,
        }
    }

    /// Wire every stage from configuration
    pub fn from_config(config: &Config, farmers: Arc<dyn FarmerRepository>) -> Self {
        Self::new(
            farmers,
            GeoResolver::from_config(config),
            EnvironmentEnricher::from_config(config),
            AdvisorClient::from_config(config),
        )
    }

    /// Answer a farmer's question
    pub async fn advise(&self, request: &AdviceRequest) -> AppResult<AdvisoryResponse> {
        let farmer = self
            .farmers
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::NotFound("Farmer".to_string()))?;

        let coords = self.geo.resolve(&farmer).await;
        let environment = self.environment.enrich(*coords.value()).await;

        tracing::info!(
            farmer_id = %farmer.id,
            geocoded = !coords.is_fallback(),
            soil_fetched = !environment.soil.is_fallback(),
            weather_fetched = !environment.weather.is_fallback(),
            "Enriched farmer profile"
        );

        let soil = environment.soil.into_inner();
        let weather = environment.weather.into_inner();

        let answer = self
            .advisor
            .advise(&farmer, &soil, &weather, &request.question)
            .await?;

        Ok(AdvisoryResponse {
            answer,
            soil,
            weather,
        })
    }
}
