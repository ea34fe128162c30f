//! Shared types and models for the Farm Advisor service
//!
//! This crate contains the wire types exchanged between the backend and its
//! web client, plus the coordinate range check applied to geocoding results.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
