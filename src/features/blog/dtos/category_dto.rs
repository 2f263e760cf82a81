use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::blog::models::BlogCategory;

/// Create or update a blog category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CategoryFormDto {
    #[validate(length(min = 1, max = 100, message = "Nama kategori wajib diisi"))]
    pub name: String,
    /// Left blank to derive from the name
    pub slug: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub display_order: i32,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogCategory> for CategoryResponseDto {
    fn from(c: BlogCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            display_order: c.display_order,
            updated_at: c.updated_at,
        }
    }
}
