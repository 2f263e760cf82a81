use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::blog::dtos::{
    AdminPostQuery, PostFormDto, PostResponseDto, PostSummaryDto, PreparedPost, PublicPostQuery,
};
use crate::features::blog::models::{Post, PostStatus};
use crate::shared::cache::ContentCache;

const POST_COLUMNS: &str = "id, title, slug, excerpt, content, cover_image, category, author, \
     status, published_at, seo_title, meta_description, focus_keyword, created_at, updated_at";

/// Published, or scheduled with a publish time that has passed
const PUBLIC_FILTER: &str =
    "(status = 'published' OR (status = 'scheduled' AND published_at <= NOW()))";

const DUPLICATE_SLUG: &str = "Slug sudah dipakai oleh post lain";

pub struct PostService {
    pool: PgPool,
    latest_cache: ContentCache<Vec<PostSummaryDto>>,
}

impl std::fmt::Debug for PostService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostService")
            .field("pool", &"<PgPool>")
            .field("latest_cache", &self.latest_cache)
            .finish()
    }
}

impl PostService {
    pub fn new(pool: PgPool, cache_ttl: Duration) -> Self {
        Self {
            pool,
            latest_cache: ContentCache::new(cache_ttl),
        }
    }

    /// Create a post
    pub async fn create(&self, dto: PostFormDto) -> Result<PostResponseDto> {
        let prepared = dto.prepare(None, Utc::now())?;

        let query = format!(
            r#"
            INSERT INTO blog_posts (title, slug, excerpt, content, cover_image, category, author,
                                    status, published_at, seo_title, meta_description, focus_keyword)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            POST_COLUMNS
        );

        let post = bind_prepared(sqlx::query_as::<_, Post>(&query), &prepared)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create post: {:?}", e);
                handle_db_error(e, DUPLICATE_SLUG)
            })?;

        tracing::info!("Post created: id={}, slug={}, status={}", post.id, post.slug, post.status);
        self.latest_cache.invalidate().await;

        Ok(post.into())
    }

    /// Get any post by ID (admin)
    pub async fn get(&self, id: Uuid) -> Result<PostResponseDto> {
        self.find(id).await.map(PostResponseDto::from)
    }

    /// List posts with pagination, status filter and title search (admin)
    pub async fn list(&self, params: &AdminPostQuery) -> Result<(Vec<PostSummaryDto>, i64)> {
        let pagination = params.pagination();
        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM blog_posts
            WHERE ($1::post_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR title ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(params.status)
        .bind(search)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count posts: {:?}", e);
            AppError::Database(e)
        })?;

        let query = format!(
            r#"
            SELECT {} FROM blog_posts
            WHERE ($1::post_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR title ILIKE '%' || $2 || '%')
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
            POST_COLUMNS
        );

        let posts = sqlx::query_as::<_, Post>(&query)
            .bind(params.status)
            .bind(search)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list posts: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((posts.into_iter().map(PostSummaryDto::from).collect(), total))
    }

    /// Replace every editable field of a post
    pub async fn update(&self, id: Uuid, dto: PostFormDto) -> Result<PostResponseDto> {
        dto.ensure_required()?;

        let existing = self.find(id).await?;
        let prepared = dto.prepare(existing.published_at, Utc::now())?;

        let query = format!(
            r#"
            UPDATE blog_posts
            SET title = $1, slug = $2, excerpt = $3, content = $4, cover_image = $5,
                category = $6, author = $7, status = $8, published_at = $9,
                seo_title = $10, meta_description = $11, focus_keyword = $12,
                updated_at = NOW()
            WHERE id = $13
            RETURNING {}
            "#,
            POST_COLUMNS
        );

        let post = bind_prepared(sqlx::query_as::<_, Post>(&query), &prepared)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update post {}: {:?}", id, e);
                handle_db_error(e, DUPLICATE_SLUG)
            })?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Post updated: id={}, status={}", post.id, post.status);
        self.latest_cache.invalidate().await;

        Ok(post.into())
    }

    /// Hard delete
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete post {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Post deleted: id={}", id);
        self.latest_cache.invalidate().await;

        Ok(())
    }

    /// Mark a post published, stamping `published_at` when it has none
    pub async fn publish(&self, id: Uuid) -> Result<PostResponseDto> {
        let query = format!(
            r#"
            UPDATE blog_posts
            SET status = $1, published_at = COALESCE(published_at, NOW()), updated_at = NOW()
            WHERE id = $2
            RETURNING {}
            "#,
            POST_COLUMNS
        );

        let post = sqlx::query_as::<_, Post>(&query)
            .bind(PostStatus::Published)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to publish post {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Post published: id={}, published_at={:?}", post.id, post.published_at);
        self.latest_cache.invalidate().await;

        Ok(post.into())
    }

    /// Public posts, newest first, optionally filtered by category name
    pub async fn list_published(
        &self,
        params: &PublicPostQuery,
    ) -> Result<(Vec<PostSummaryDto>, i64)> {
        let pagination = params.pagination();
        let category = params
            .category
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let count_query = format!(
            "SELECT COUNT(*) FROM blog_posts WHERE {} AND ($1::text IS NULL OR category = $1)",
            PUBLIC_FILTER
        );
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(category)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count published posts: {:?}", e);
                AppError::Database(e)
            })?;

        let query = format!(
            r#"
            SELECT {} FROM blog_posts
            WHERE {} AND ($1::text IS NULL OR category = $1)
            ORDER BY published_at DESC NULLS LAST, created_at DESC
            LIMIT $2 OFFSET $3
            "#,
            POST_COLUMNS, PUBLIC_FILTER
        );

        let posts = sqlx::query_as::<_, Post>(&query)
            .bind(category)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list published posts: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((posts.into_iter().map(PostSummaryDto::from).collect(), total))
    }

    /// Public post by slug; drafts and future scheduled posts are not found
    pub async fn get_published_by_slug(&self, slug: &str) -> Result<PostResponseDto> {
        let query = format!(
            "SELECT {} FROM blog_posts WHERE slug = $1 AND {}",
            POST_COLUMNS, PUBLIC_FILTER
        );

        sqlx::query_as::<_, Post>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get post by slug '{}': {:?}", slug, e);
                AppError::Database(e)
            })?
            .map(PostResponseDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Post '{}' tidak ditemukan", slug)))
    }

    /// Newest public posts for the landing page; empty when nothing was ever fetched
    pub async fn latest_published(&self, limit: i64) -> Vec<PostSummaryDto> {
        let params = PublicPostQuery {
            page: 1,
            page_size: limit,
            category: None,
        };

        self.latest_cache
            .load_or_fallback(
                "latest posts",
                move || async move { self.list_published(&params).await.map(|(posts, _)| posts) },
                Vec::new,
            )
            .await
    }

    async fn find(&self, id: Uuid) -> Result<Post> {
        let query = format!("SELECT {} FROM blog_posts WHERE id = $1", POST_COLUMNS);

        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get post {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Post dengan id {} tidak ditemukan", id))
}

/// Bind the twelve writable columns in table order
fn bind_prepared<'q>(
    query: sqlx::query::QueryAs<'q, sqlx::Postgres, Post, sqlx::postgres::PgArguments>,
    post: &'q PreparedPost,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, Post, sqlx::postgres::PgArguments> {
    query
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.cover_image)
        .bind(&post.category)
        .bind(&post.author)
        .bind(post.status)
        .bind(post.published_at)
        .bind(&post.seo_title)
        .bind(&post.meta_description)
        .bind(&post.focus_keyword)
}
