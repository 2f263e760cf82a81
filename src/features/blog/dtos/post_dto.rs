use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::blog::models::{Post, PostStatus};
use crate::features::blog::slug::resolve_slug;
use crate::shared::constants::{BLOG_PAGE_SIZE, DEFAULT_POST_AUTHOR};
use crate::shared::types::{default_page, default_page_size, non_blank, PaginationQuery};

/// Full post form, used for both create and update
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PostFormDto {
    pub title: String,
    /// Left blank to derive from the title
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    /// Defaults to "Tim Temujanji"
    pub author: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    /// Required when status is `scheduled`
    pub published_at: Option<DateTime<Utc>>,
    /// Defaults to the title
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    pub focus_keyword: Option<String>,
}

/// A post form after defaults are applied, ready to be written
#[derive(Debug, Clone, Validate)]
pub struct PreparedPost {
    #[validate(length(max = 255, message = "Judul maksimal 255 karakter"))]
    pub title: String,
    #[validate(length(max = 255))]
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    #[validate(url(message = "Cover image harus berupa URL"))]
    pub cover_image: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 200))]
    pub author: String,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    #[validate(length(max = 255))]
    pub seo_title: String,
    pub meta_description: Option<String>,
    #[validate(length(max = 100))]
    pub focus_keyword: Option<String>,
}

impl PostFormDto {
    /// Title and content must both be non-blank
    pub fn ensure_required(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("Judul wajib diisi".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(AppError::Validation("Konten wajib diisi".to_string()));
        }
        Ok(())
    }

    /// Apply defaults and check the form without touching the database.
    ///
    /// `existing_published_at` is the stored timestamp when updating, so a
    /// post that was already published keeps its original date.
    pub fn prepare(
        self,
        existing_published_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<PreparedPost> {
        self.ensure_required()?;
        let title = self.title.trim().to_string();

        let slug = resolve_slug(self.slug.as_deref(), &title)?;
        let author = non_blank(self.author).unwrap_or_else(|| DEFAULT_POST_AUTHOR.to_string());
        let seo_title = non_blank(self.seo_title).unwrap_or_else(|| title.clone());

        let published_at = match self.status {
            PostStatus::Published => {
                Some(self.published_at.or(existing_published_at).unwrap_or(now))
            }
            PostStatus::Scheduled => Some(self.published_at.or(existing_published_at).ok_or_else(
                || AppError::Validation("Tanggal terbit wajib diisi untuk post terjadwal".to_string()),
            )?),
            PostStatus::Draft => self.published_at,
        };

        let prepared = PreparedPost {
            title,
            slug,
            excerpt: non_blank(self.excerpt),
            content: self.content,
            cover_image: non_blank(self.cover_image),
            category: non_blank(self.category),
            author,
            status: self.status,
            published_at,
            seo_title,
            meta_description: non_blank(self.meta_description),
            focus_keyword: non_blank(self.focus_keyword),
        };

        prepared
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(prepared)
    }
}

/// Admin list filters
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AdminPostQuery {
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,

    /// Filter by status
    pub status: Option<PostStatus>,

    /// Case-insensitive search on title
    pub search: Option<String>,
}

impl AdminPostQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

fn default_blog_page_size() -> i64 {
    BLOG_PAGE_SIZE
}

/// Public list filters
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PublicPostQuery {
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    #[serde(default = "default_blog_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,

    /// Category name
    pub category: Option<String>,
}

impl Default for PublicPostQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: BLOG_PAGE_SIZE,
            category: None,
        }
    }
}

impl PublicPostQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Full post, returned by the admin API and the public detail endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostResponseDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub author: String,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    pub focus_keyword: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponseDto {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            slug: p.slug,
            excerpt: p.excerpt,
            content: p.content,
            cover_image: p.cover_image,
            category: p.category,
            author: p.author,
            status: p.status,
            published_at: p.published_at,
            seo_title: p.seo_title,
            meta_description: p.meta_description,
            focus_keyword: p.focus_keyword,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Post without its body, for list views
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub author: String,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostSummaryDto {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            slug: p.slug,
            excerpt: p.excerpt,
            cover_image: p.cover_image,
            category: p.category,
            author: p.author,
            status: p.status,
            published_at: p.published_at,
            updated_at: p.updated_at,
        }
    }
}
