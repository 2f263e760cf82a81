use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One stored URL override
#[derive(Debug, Clone, FromRow)]
pub struct SiteUrl {
    pub id: Uuid,
    pub section: String,
    pub key: String,
    pub label: Option<String>,
    pub url: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
