use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    pub avatar_url: Option<String>,
    pub rating: i16,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
