use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::testimonials::models::Testimonial;
use crate::shared::types::blank_as_none;
use crate::shared::validation::NON_BLANK_REGEX;

fn default_rating() -> i16 {
    5
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TestimonialFormDto {
    #[validate(
        length(max = 200),
        regex(path = *NON_BLANK_REGEX, message = "Nama wajib diisi")
    )]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 200))]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 200))]
    pub company: Option<String>,
    #[validate(regex(path = *NON_BLANK_REGEX, message = "Testimoni wajib diisi"))]
    pub quote: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url(message = "Avatar harus berupa URL"))]
    pub avatar_url: Option<String>,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 5, message = "Rating harus 1 sampai 5"))]
    pub rating: i16,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TestimonialResponseDto {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    pub avatar_url: Option<String>,
    pub rating: i16,
    pub display_order: i32,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<Testimonial> for TestimonialResponseDto {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id,
            name: t.name,
            role: t.role,
            company: t.company,
            quote: t.quote,
            avatar_url: t.avatar_url,
            rating: t.rating,
            display_order: t.display_order,
            is_active: t.is_active,
            updated_at: t.updated_at,
        }
    }
}
