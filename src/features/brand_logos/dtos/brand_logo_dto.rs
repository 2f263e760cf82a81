use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::brand_logos::models::BrandLogo;
use crate::shared::types::blank_as_none;
use crate::shared::validation::NON_BLANK_REGEX;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BrandLogoFormDto {
    #[validate(
        length(max = 200),
        regex(path = *NON_BLANK_REGEX, message = "Nama brand wajib diisi")
    )]
    pub name: String,
    #[validate(url(message = "Logo harus berupa URL"))]
    pub logo_url: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url(message = "Website harus berupa URL"))]
    pub website_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BrandLogoResponseDto {
    pub id: Uuid,
    pub name: String,
    pub logo_url: String,
    pub website_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<BrandLogo> for BrandLogoResponseDto {
    fn from(b: BrandLogo) -> Self {
        Self {
            id: b.id,
            name: b.name,
            logo_url: b.logo_url,
            website_url: b.website_url,
            display_order: b.display_order,
            is_active: b.is_active,
            updated_at: b.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_logo_url_required_and_valid() {
        let ok: BrandLogoFormDto = serde_json::from_value(json!({
            "name": "Kopi Kawan",
            "logo_url": "https://cdn.temujanji.id/logos/kopi-kawan.svg"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());

        let bad: BrandLogoFormDto = serde_json::from_value(json!({
            "name": "Kopi Kawan",
            "logo_url": "kopi-kawan.svg"
        }))
        .unwrap();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_blank_website_is_treated_as_missing() {
        let dto: BrandLogoFormDto = serde_json::from_value(json!({
            "name": "Kopi Kawan",
            "logo_url": "https://cdn.temujanji.id/logos/kopi-kawan.svg",
            "website_url": " "
        }))
        .unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.website_url, None);
    }
}
