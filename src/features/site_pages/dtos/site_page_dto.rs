use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::site_pages::models::PageKey;
use crate::shared::validation::NON_BLANK_REGEX;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateSitePageDto {
    #[validate(
        length(max = 255),
        regex(path = *NON_BLANK_REGEX, message = "Judul wajib diisi")
    )]
    pub title: String,
    #[validate(regex(path = *NON_BLANK_REGEX, message = "Konten wajib diisi"))]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SitePageDto {
    pub key: PageKey,
    pub title: String,
    pub content: String,
    /// None while the built-in text is shown
    pub updated_at: Option<DateTime<Utc>>,
}
