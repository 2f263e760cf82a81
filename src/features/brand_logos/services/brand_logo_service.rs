use std::time::Duration;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::brand_logos::dtos::{BrandLogoFormDto, BrandLogoResponseDto};
use crate::features::brand_logos::models::BrandLogo;
use crate::shared::cache::ContentCache;

pub struct BrandLogoService {
    pool: PgPool,
    cache: ContentCache<Vec<BrandLogoResponseDto>>,
}

impl BrandLogoService {
    pub fn new(pool: PgPool, cache_ttl: Duration) -> Self {
        Self {
            pool,
            cache: ContentCache::new(cache_ttl),
        }
    }

    /// Active logos; an empty strip when nothing was ever fetched
    pub async fn list_active(&self) -> Vec<BrandLogoResponseDto> {
        self.cache
            .load_or_fallback("brand logos", || self.fetch(true), Vec::new)
            .await
    }

    pub async fn list(&self) -> Result<Vec<BrandLogoResponseDto>> {
        self.fetch(false).await
    }

    pub async fn create(&self, dto: BrandLogoFormDto) -> Result<BrandLogoResponseDto> {
        let logo = sqlx::query_as::<_, BrandLogo>(
            r#"
            INSERT INTO brand_logos (name, logo_url, website_url, display_order, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, logo_url, website_url, display_order, is_active, created_at, updated_at
            "#,
        )
        .bind(dto.name.trim())
        .bind(dto.logo_url.trim())
        .bind(dto.website_url)
        .bind(dto.display_order)
        .bind(dto.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create brand logo: {:?}", e);
            AppError::Database(e)
        })?;

        self.cache.invalidate().await;
        Ok(logo.into())
    }

    pub async fn update(&self, id: Uuid, dto: BrandLogoFormDto) -> Result<BrandLogoResponseDto> {
        let logo = sqlx::query_as::<_, BrandLogo>(
            r#"
            UPDATE brand_logos
            SET name = $1, logo_url = $2, website_url = $3, display_order = $4,
                is_active = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING id, name, logo_url, website_url, display_order, is_active, created_at, updated_at
            "#,
        )
        .bind(dto.name.trim())
        .bind(dto.logo_url.trim())
        .bind(dto.website_url)
        .bind(dto.display_order)
        .bind(dto.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update brand logo {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Logo dengan id {} tidak ditemukan", id)))?;

        self.cache.invalidate().await;
        Ok(logo.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM brand_logos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete brand logo {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Logo dengan id {} tidak ditemukan", id)));
        }

        self.cache.invalidate().await;
        Ok(())
    }

    async fn fetch(&self, active_only: bool) -> Result<Vec<BrandLogoResponseDto>> {
        let rows = sqlx::query_as::<_, BrandLogo>(
            r#"
            SELECT id, name, logo_url, website_url, display_order, is_active, created_at, updated_at
            FROM brand_logos
            WHERE ($1 = FALSE OR is_active = TRUE)
            ORDER BY display_order, name
            "#,
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch brand logos: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(BrandLogoResponseDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::unreachable_pool;

    #[tokio::test]
    async fn test_list_active_survives_unreachable_database() {
        let svc = BrandLogoService::new(unreachable_pool(), Duration::from_secs(60));
        assert!(svc.list_active().await.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_invalidates_public_cache(pool: PgPool) {
        let svc = BrandLogoService::new(pool, Duration::from_secs(3600));
        assert!(svc.list_active().await.is_empty());

        svc.create(BrandLogoFormDto {
            name: "Kopi Kawan".to_string(),
            logo_url: "https://cdn.temujanji.id/logos/kopi.svg".to_string(),
            website_url: None,
            display_order: 0,
            is_active: true,
        })
        .await
        .unwrap();

        assert_eq!(svc.list_active().await.len(), 1);
    }
}
