//! Route definitions for the Farm Advisor service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Advisory chat
        .nest("/chat", chat_routes())
}

/// Advisory chat routes
fn chat_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::ask_advisor))
}
