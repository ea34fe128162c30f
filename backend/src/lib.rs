//! Farm Advisor - Backend Library
//!
//! Answers farmers' questions with a language model, grounded in their
//! stored profile plus geocoding, soil and weather data.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use services::{AdviceService, FarmerRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub farmers: Arc<dyn FarmerRepository>,
    pub advice: Arc<AdviceService>,
}

impl AppState {
    /// Build the state, wiring every outbound client from configuration
    pub fn new(config: &Config, farmers: Arc<dyn FarmerRepository>) -> Self {
        let advice = AdviceService::from_config(config, farmers.clone());
        Self {
            farmers,
            advice: Arc::new(advice),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Farm Advisor API v1.0"
}
