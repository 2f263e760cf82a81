use std::time::Duration;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::blog::dtos::{CategoryFormDto, CategoryResponseDto};
use crate::features::blog::models::BlogCategory;
use crate::features::blog::slug::resolve_slug;
use crate::shared::cache::ContentCache;

const DUPLICATE_SLUG: &str = "Slug kategori sudah dipakai";

/// Service for blog category operations
pub struct CategoryService {
    pool: PgPool,
    cache: ContentCache<Vec<CategoryResponseDto>>,
}

impl CategoryService {
    pub fn new(pool: PgPool, cache_ttl: Duration) -> Self {
        Self {
            pool,
            cache: ContentCache::new(cache_ttl),
        }
    }

    /// All categories ordered for display
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, BlogCategory>(
            r#"
            SELECT id, name, slug, display_order, created_at, updated_at
            FROM blog_categories
            ORDER BY display_order, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list blog categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(CategoryResponseDto::from).collect())
    }

    /// Category list for public pages; never fails
    pub async fn list_cached(&self) -> Vec<CategoryResponseDto> {
        self.cache
            .load_or_fallback("blog categories", || self.list(), Vec::new)
            .await
    }

    pub async fn create(&self, dto: CategoryFormDto) -> Result<CategoryResponseDto> {
        let name = dto.name.trim().to_string();
        let slug = resolve_slug(dto.slug.as_deref(), &name)?;

        let category = sqlx::query_as::<_, BlogCategory>(
            r#"
            INSERT INTO blog_categories (name, slug, display_order)
            VALUES ($1, $2, $3)
            RETURNING id, name, slug, display_order, created_at, updated_at
            "#,
        )
        .bind(&name)
        .bind(&slug)
        .bind(dto.display_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create blog category: {:?}", e);
            handle_db_error(e, DUPLICATE_SLUG)
        })?;

        tracing::info!("Blog category created: {}", category.slug);
        self.cache.invalidate().await;

        Ok(category.into())
    }

    pub async fn update(&self, id: Uuid, dto: CategoryFormDto) -> Result<CategoryResponseDto> {
        let name = dto.name.trim().to_string();
        let slug = resolve_slug(dto.slug.as_deref(), &name)?;

        let category = sqlx::query_as::<_, BlogCategory>(
            r#"
            UPDATE blog_categories
            SET name = $1, slug = $2, display_order = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, name, slug, display_order, created_at, updated_at
            "#,
        )
        .bind(&name)
        .bind(&slug)
        .bind(dto.display_order)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update blog category {}: {:?}", id, e);
            handle_db_error(e, DUPLICATE_SLUG)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Kategori dengan id {} tidak ditemukan", id)))?;

        self.cache.invalidate().await;
        Ok(category.into())
    }

    /// Delete a category. Posts keep their category text.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM blog_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete blog category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Kategori dengan id {} tidak ditemukan",
                id
            )));
        }

        self.cache.invalidate().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::unreachable_pool;

    #[tokio::test]
    async fn test_list_cached_survives_unreachable_database() {
        let svc = CategoryService::new(unreachable_pool(), Duration::from_secs(60));
        assert!(svc.list_cached().await.is_empty());
    }

    #[tokio::test]
    async fn test_unsluggable_name_rejected_before_database() {
        let svc = CategoryService::new(unreachable_pool(), Duration::from_secs(60));
        let dto = CategoryFormDto {
            name: "!!!".to_string(),
            slug: None,
            display_order: 0,
        };
        assert!(matches!(svc.create(dto).await, Err(AppError::Validation(_))));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_category_crud(pool: PgPool) {
        let svc = CategoryService::new(pool, Duration::from_secs(60));

        let created = svc
            .create(CategoryFormDto {
                name: "Tips Produktivitas".to_string(),
                slug: None,
                display_order: 1,
            })
            .await
            .unwrap();
        assert_eq!(created.slug, "tips-produktivitas");

        let updated = svc
            .update(
                created.id,
                CategoryFormDto {
                    name: "Produktivitas".to_string(),
                    slug: Some("produktivitas".to_string()),
                    display_order: 2,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Produktivitas");

        assert_eq!(svc.list_cached().await.len(), 1);
        svc.delete(created.id).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }
}
