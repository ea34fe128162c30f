//! Models for the Farm Advisor service
//!
//! Re-exports wire models and validation from the shared crate

pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;
