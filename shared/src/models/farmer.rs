//! Farmer profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered farmer, as stored by the profile database
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmerProfile {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub city: String,
    /// State, province or region the city belongs to
    pub state: String,
    pub crop: String,
    pub created_at: DateTime<Utc>,
}
