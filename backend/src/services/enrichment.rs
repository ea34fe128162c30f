//! Best-effort enrichment of a farmer's location
//!
//! Geocoding, soil and weather lookups never fail a request. Any upstream
//! error is logged and replaced with a fixed fallback value.

use shared::{Coordinates, FarmerProfile, SoilSample, WeatherSnapshot};

use crate::config::Config;
use crate::error::AppResult;
use crate::external::{GeocodingClient, SoilGridsClient, WeatherClient};

/// Outcome of a lookup that may have degraded to a default
#[derive(Debug, Clone, PartialEq)]
pub enum Enriched<T> {
    Fetched(T),
    Fallback(T),
}

impl<T> Enriched<T> {
    /// Keep the upstream value, or substitute the fallback and log why
    pub fn from_result(
        source: &'static str,
        result: AppResult<T>,
        fallback: impl FnOnce() -> T,
    ) -> Self {
        match result {
            Ok(value) => Enriched::Fetched(value),
            Err(error) => {
                tracing::warn!(source, error = %error, "Lookup failed, using fallback data");
                Enriched::Fallback(fallback())
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Enriched::Fallback(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Enriched::Fetched(v) | Enriched::Fallback(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Enriched::Fetched(v) | Enriched::Fallback(v) => v,
        }
    }
}

/// Maps a farmer's city and region to coordinates
#[derive(Clone)]
pub struct GeoResolver {
    client: GeocodingClient,
}

impl GeoResolver {
    pub fn new(client: GeocodingClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(GeocodingClient::new(
            config.geocoding.api_key.clone(),
            config.geocoding.api_endpoint.clone(),
            config.http.timeout(),
        ))
    }

    /// Resolve the farmer's location, falling back to (0, 0)
    pub async fn resolve(&self, farmer: &FarmerProfile) -> Enriched<Coordinates> {
        let result = self.client.forward_geocode(&farmer.city, &farmer.state).await;
        Enriched::from_result("geocoding", result, || Coordinates::ORIGIN)
    }
}

/// Soil and weather conditions at a location
#[derive(Debug, Clone)]
pub struct Environment {
    pub soil: Enriched<SoilSample>,
    pub weather: Enriched<WeatherSnapshot>,
}

/// Fetches soil and weather data for coordinates
#[derive(Clone)]
pub struct EnvironmentEnricher {
    soil_client: SoilGridsClient,
    weather_client: WeatherClient,
}

impl EnvironmentEnricher {
    pub fn new(soil_client: SoilGridsClient, weather_client: WeatherClient) -> Self {
        Self {
            soil_client,
            weather_client,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let timeout = config.http.timeout();
        Self::new(
            SoilGridsClient::new(config.soil.api_endpoint.clone(), timeout),
            WeatherClient::new(
                config.weather.api_key.clone(),
                config.weather.api_endpoint.clone(),
                timeout,
            ),
        )
    }

    /// Soil sample at the coordinates, or the loam fallback
    pub async fn soil(&self, coords: Coordinates) -> Enriched<SoilSample> {
        let result = self.soil_client.get_soil(coords).await;
        Enriched::from_result("soil", result, SoilSample::fallback)
    }

    /// Current weather at the coordinates, or the clear-day fallback
    pub async fn weather(&self, coords: Coordinates) -> Enriched<WeatherSnapshot> {
        let result = self.weather_client.get_current_weather(coords).await;
        Enriched::from_result("weather", result, WeatherSnapshot::fallback)
    }

    /// Run both lookups concurrently
    pub async fn enrich(&self, coords: Coordinates) -> Environment {
        let (soil, weather) = tokio::join!(self.soil(coords), self.weather(coords));
        Environment { soil, weather }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_ok_result_is_fetched() {
        let enriched = Enriched::from_result("test", Ok(Coordinates::new(1.0, 2.0)), || {
            Coordinates::ORIGIN
        });
        assert!(!enriched.is_fallback());
        assert_eq!(enriched.into_inner(), Coordinates::new(1.0, 2.0));
    }

    #[test]
    fn test_error_result_uses_fallback() {
        let enriched = Enriched::from_result(
            "test",
            Err(AppError::SoilError("timeout".into())),
            SoilSample::fallback,
        );
        assert!(enriched.is_fallback());
        assert_eq!(enriched.value(), &SoilSample::fallback());
    }

    #[tokio::test]
    async fn test_unreachable_services_degrade_to_fallbacks() {
        // Nothing listens on port 9 locally; connections are refused.
        let timeout = std::time::Duration::from_secs(2);
        let enricher = EnvironmentEnricher::new(
            SoilGridsClient::new("http://127.0.0.1:9", timeout),
            WeatherClient::new("key", "http://127.0.0.1:9", timeout),
        );

        let environment = enricher.enrich(Coordinates::ORIGIN).await;

        assert_eq!(environment.soil, Enriched::Fallback(SoilSample::fallback()));
        assert_eq!(
            environment.weather,
            Enriched::Fallback(WeatherSnapshot::fallback())
        );
    }
}
