//! External API integrations

pub mod geocoding;
pub mod llm;
pub mod soil;
pub mod weather;

pub use geocoding::GeocodingClient;
pub use llm::{ChatCompletionsClient, ChatMessage};
pub use soil::SoilGridsClient;
pub use weather::WeatherClient;

use reqwest::Client;
use std::time::Duration;

/// Build an HTTP client with a bounded per-request timeout
pub(crate) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build HTTP client with custom timeout, using default client");
            Client::new()
        })
}

/// Read a failed response into an error message
pub(crate) async fn describe_failure(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    format!("{} - {}", status, body)
}
