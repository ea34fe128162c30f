//! Test fixtures shared by the integration tests
//!
//! Every upstream service is a wiremock server; farmer profiles live in memory.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::MockServer;

use farm_advisor::config::{
    Config, DatabaseConfig, GeocodingConfig, HttpConfig, LlmConfig, ServerConfig, SoilConfig,
    WeatherConfig,
};
use farm_advisor::error::AppResult;
use farm_advisor::models::FarmerProfile;
use farm_advisor::services::FarmerRepository;
use farm_advisor::{create_app, AppState};

pub const LLM_PATH: &str = "/v1/llm/completions";
pub const LLM_API_KEY: &str = "test-llm-key";
pub const GEOCODING_API_KEY: &str = "test-geocoding-key";
pub const WEATHER_API_KEY: &str = "test-weather-key";

/// In-memory farmer store that counts lookups
#[derive(Default)]
pub struct InMemoryFarmers {
    farmers: Vec<FarmerProfile>,
    lookups: AtomicUsize,
}

impl InMemoryFarmers {
    pub fn with(farmers: Vec<FarmerProfile>) -> Self {
        Self {
            farmers,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FarmerRepository for InMemoryFarmers {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<FarmerProfile>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .farmers
            .iter()
            .find(|f| f.email == email)
            .cloned())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Farmer in Springfield, IL growing corn
pub fn springfield_farmer() -> FarmerProfile {
    FarmerProfile {
        id: Uuid::new_v4(),
        email: "farmer@example.com".to_string(),
        name: Some("Pat Miller".to_string()),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        crop: "corn".to_string(),
        created_at: Utc::now(),
    }
}

/// Mock servers standing in for the four upstream APIs
pub struct Upstreams {
    pub geocoding: MockServer,
    pub soil: MockServer,
    pub weather: MockServer,
    pub llm: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            geocoding: MockServer::start().await,
            soil: MockServer::start().await,
            weather: MockServer::start().await,
            llm: MockServer::start().await,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: "postgres://localhost/farm_advisor_test".to_string(),
                max_connections: 1,
                min_connections: 0,
            },
            http: HttpConfig { timeout_secs: 5 },
            geocoding: GeocodingConfig {
                api_endpoint: self.geocoding.uri(),
                api_key: GEOCODING_API_KEY.to_string(),
            },
            soil: SoilConfig {
                api_endpoint: self.soil.uri(),
            },
            weather: WeatherConfig {
                api_endpoint: self.weather.uri(),
                api_key: WEATHER_API_KEY.to_string(),
            },
            llm: LlmConfig {
                api_endpoint: format!("{}{}", self.llm.uri(), LLM_PATH),
                api_key: LLM_API_KEY.to_string(),
                model: "groq-llm-text-1".to_string(),
                timeout_secs: 5,
            },
        }
    }

    /// Router wired against these mock servers
    pub fn app(&self, farmers: Arc<InMemoryFarmers>) -> Router {
        create_app(AppState::new(&self.config(), farmers))
    }

    /// JSON bodies of every request the language model received
    pub async fn llm_requests(&self) -> Vec<Value> {
        self.llm
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.body_json::<Value>().unwrap())
            .collect()
    }
}

// ============================================================================
// Upstream fixtures
// ============================================================================

pub fn geocoding_body() -> Value {
    serde_json::json!({
        "results": [
            { "geometry": { "lat": 39.7817, "lng": -89.6501 }, "formatted": "Springfield, IL, USA" },
            { "geometry": { "lat": 37.2153, "lng": -93.2982 }, "formatted": "Springfield, MO, USA" }
        ],
        "status": { "code": 200, "message": "OK" }
    })
}

pub fn soil_body() -> Value {
    serde_json::json!({
        "soil": [{ "name": "Mollisols" }, { "name": "Alfisols" }],
        "phh2o": { "mean": [6.8, 7.2] },
        "organiccarbon": { "mean": [2.4, 1.1] }
    })
}

pub fn weather_body() -> Value {
    serde_json::json!({
        "main": { "temp": 24.5, "feels_like": 24.9, "humidity": 61, "pressure": 1012 },
        "weather": [
            { "id": 802, "main": "Clouds", "description": "scattered clouds" },
            { "id": 500, "main": "Rain", "description": "light rain" }
        ],
        "name": "Springfield"
    })
}

pub fn completion_body(answer: &str) -> Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "model": "groq-llm-text-1",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": answer }, "finish_reason": "stop" }
        ]
    })
}

// ============================================================================
// Request helpers
// ============================================================================

/// POST a JSON body to the chat endpoint
pub async fn post_chat(app: Router, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri("/api/v1/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Send a request and decode the JSON response
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
