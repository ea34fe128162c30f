//! Farmer profile lookup

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::FarmerProfile;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::AppResult;

/// Read access to stored farmer profiles
#[async_trait]
pub trait FarmerRepository: Send + Sync {
    /// Find a farmer by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<FarmerProfile>>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Farmer row as stored in PostgreSQL
#[derive(Debug, Clone, FromRow)]
struct FarmerRecord {
    id: Uuid,
    email: String,
    name: Option<String>,
    city: String,
    state: String,
    crop: String,
    created_at: DateTime<Utc>,
}

impl From<FarmerRecord> for FarmerProfile {
    fn from(r: FarmerRecord) -> Self {
        FarmerProfile {
            id: r.id,
            email: r.email,
            name: r.name,
            city: r.city,
            state: r.state,
            crop: r.crop,
            created_at: r.created_at,
        }
    }
}

/// PostgreSQL-backed farmer repository
#[derive(Clone)]
pub struct PgFarmerRepository {
    db: PgPool,
}

impl PgFarmerRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FarmerRepository for PgFarmerRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<FarmerProfile>> {
        let record = sqlx::query_as::<_, FarmerRecord>(
            r#"
            SELECT id, email, name, city, state, crop, created_at
            FROM farmers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(record.map(FarmerProfile::from))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }
}
