//! Business logic services for the Farm Advisor service

pub mod advice;
pub mod advisor;
pub mod enrichment;
pub mod farmer;

pub use advice::AdviceService;
pub use advisor::AdvisorClient;
pub use enrichment::{Enriched, EnvironmentEnricher, GeoResolver};
pub use farmer::{FarmerRepository, PgFarmerRepository};
