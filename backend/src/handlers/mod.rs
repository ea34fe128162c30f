//! HTTP handlers

pub mod advice;
pub mod health;

pub use advice::ask_advisor;
pub use health::health_check;
