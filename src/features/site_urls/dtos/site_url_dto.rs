use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::site_urls::models::SiteUrl;
use crate::shared::validation::IDENTIFIER_REGEX;

/// A labelled link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkDto {
    pub label: String,
    pub url: String,
}

/// section -> key -> link
pub type UrlMap = BTreeMap<String, BTreeMap<String, LinkDto>>;

/// Insert or replace the row for `(section, key)`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpsertSiteUrlDto {
    #[validate(regex(path = *IDENTIFIER_REGEX, message = "Section tidak valid"))]
    pub section: String,
    #[validate(regex(path = *IDENTIFIER_REGEX, message = "Key tidak valid"))]
    pub key: String,
    #[validate(length(max = 200))]
    pub label: Option<String>,
    #[validate(url(message = "URL tidak valid"))]
    pub url: String,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SiteUrlResponseDto {
    pub id: Uuid,
    pub section: String,
    pub key: String,
    pub label: Option<String>,
    pub url: String,
    pub display_order: i32,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteUrl> for SiteUrlResponseDto {
    fn from(row: SiteUrl) -> Self {
        Self {
            id: row.id,
            section: row.section,
            key: row.key,
            label: row.label,
            url: row.url,
            display_order: row.display_order,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(section: &str, key: &str, url: &str) -> UpsertSiteUrlDto {
        UpsertSiteUrlDto {
            section: section.to_string(),
            key: key.to_string(),
            label: None,
            url: url.to_string(),
            display_order: 0,
        }
    }

    #[test]
    fn test_upsert_validation() {
        assert!(dto("hero", "primary_cta", "https://app.temujanji.id").validate().is_ok());
        assert!(dto("pricing", "business", "mailto:sales@temujanji.id").validate().is_ok());
        assert!(dto("Hero", "primary_cta", "https://x.id").validate().is_err());
        assert!(dto("hero", "primary-cta", "https://x.id").validate().is_err());
        assert!(dto("hero", "primary_cta", "bukan url").validate().is_err());
    }
}
