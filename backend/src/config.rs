//! Configuration management for the Farm Advisor service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARM_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Outbound HTTP settings shared by the enrichment clients
    pub http: HttpConfig,

    /// Geocoding API configuration
    pub geocoding: GeocodingConfig,

    /// Soil API configuration
    pub soil: SoilConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Language model API configuration
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Per-request timeout for geocoding, soil and weather calls
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    /// OpenCage geocode endpoint
    pub api_endpoint: String,

    /// OpenCage API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SoilConfig {
    /// SoilGrids endpoint
    pub api_endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// Chat completions URL
    pub api_endpoint: String,

    /// Bearer token for the completions API
    pub api_key: String,

    /// Model identifier sent with every completion
    pub model: String,

    /// Completion request timeout
    pub timeout_secs: u64,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::with_defaults(config::Config::builder(), &environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARM prefix)
            .add_source(
                Environment::with_prefix("FARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("environment", environment)?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.url", "postgres://localhost/farm_advisor")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("http.timeout_secs", 15)?
            .set_default(
                "geocoding.api_endpoint",
                "https://api.opencagedata.com/geocode/v1",
            )?
            .set_default("geocoding.api_key", "")?
            .set_default("soil.api_endpoint", "https://rest.soilgrids.org")?
            .set_default(
                "weather.api_endpoint",
                "https://api.openweathermap.org/data/2.5",
            )?
            .set_default("weather.api_key", "")?
            .set_default(
                "llm.api_endpoint",
                "https://api.groq.ai/v1/llm/completions",
            )?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "groq-llm-text-1")?
            .set_default("llm.timeout_secs", 60)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
