use std::time::Duration;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::site_urls::defaults::{default_urls, is_known, overlay};
use crate::features::site_urls::dtos::{SiteUrlResponseDto, UpsertSiteUrlDto, UrlMap};
use crate::features::site_urls::models::SiteUrl;
use crate::shared::cache::ContentCache;
use crate::shared::types::non_blank;

pub struct SiteUrlService {
    pool: PgPool,
    cache: ContentCache<UrlMap>,
}

impl SiteUrlService {
    pub fn new(pool: PgPool, cache_ttl: Duration) -> Self {
        Self {
            pool,
            cache: ContentCache::new(cache_ttl),
        }
    }

    /// Resolved URL map. Falls back to the last fetched map, then the defaults.
    pub async fn get_urls(&self) -> UrlMap {
        self.cache
            .load_or_fallback(
                "site urls",
                || async {
                    let rows = self.list_rows().await?;
                    Ok::<_, AppError>(overlay(default_urls(), &rows))
                },
                default_urls,
            )
            .await
    }

    /// Stored rows (admin)
    pub async fn list(&self) -> Result<Vec<SiteUrlResponseDto>> {
        let rows = self.list_rows().await?;
        Ok(rows.into_iter().map(SiteUrlResponseDto::from).collect())
    }

    pub async fn upsert(&self, dto: UpsertSiteUrlDto) -> Result<SiteUrlResponseDto> {
        if !is_known(&dto.section, &dto.key) {
            return Err(AppError::Validation(format!(
                "URL {}.{} tidak dikenal",
                dto.section, dto.key
            )));
        }

        let row = sqlx::query_as::<_, SiteUrl>(
            r#"
            INSERT INTO site_urls (section, key, label, url, display_order)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (section, key) DO UPDATE
            SET label = EXCLUDED.label,
                url = EXCLUDED.url,
                display_order = EXCLUDED.display_order,
                updated_at = NOW()
            RETURNING id, section, key, label, url, display_order, created_at, updated_at
            "#,
        )
        .bind(&dto.section)
        .bind(&dto.key)
        .bind(non_blank(dto.label))
        .bind(dto.url.trim())
        .bind(dto.display_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert url {}.{}: {:?}", dto.section, dto.key, e);
            AppError::Database(e)
        })?;

        tracing::info!("Site url saved: {}.{}", row.section, row.key);
        self.cache.invalidate().await;

        Ok(row.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM site_urls WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete url {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("URL dengan id {} tidak ditemukan", id)));
        }

        self.cache.invalidate().await;
        Ok(())
    }

    async fn list_rows(&self) -> Result<Vec<SiteUrl>> {
        sqlx::query_as::<_, SiteUrl>(
            r#"
            SELECT id, section, key, label, url, display_order, created_at, updated_at
            FROM site_urls
            ORDER BY section, display_order, key
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch site urls: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::unreachable_pool;
    use crate::features::site_urls::defaults::SECTIONS;

    fn service() -> SiteUrlService {
        SiteUrlService::new(unreachable_pool(), Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_failed_fetch_without_cache_serves_defaults() {
        let urls = service().get_urls().await;
        assert_eq!(urls, default_urls());
        for section in SECTIONS {
            assert!(!urls[section].is_empty());
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_serves_last_known_copy() {
        let svc = service();
        let mut known = default_urls();
        if let Some(entry) = known.get_mut("hero").and_then(|h| h.get_mut("primary_cta")) {
            entry.url = "https://promo.temujanji.id".to_string();
        }
        svc.cache.store(known.clone()).await;
        svc.cache.invalidate().await;

        assert_eq!(svc.get_urls().await, known);
    }

    #[tokio::test]
    async fn test_unknown_pair_rejected_before_database() {
        let dto = UpsertSiteUrlDto {
            section: "sidebar".to_string(),
            key: "promo".to_string(),
            label: None,
            url: "https://x.id".to_string(),
            display_order: 0,
        };
        assert!(matches!(service().upsert(dto).await, Err(AppError::Validation(_))));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_upsert_overrides_and_delete_restores_default(pool: PgPool) {
        let svc = SiteUrlService::new(pool, Duration::from_secs(60));
        let dto = UpsertSiteUrlDto {
            section: "pricing".to_string(),
            key: "pro".to_string(),
            label: Some("Langganan Pro".to_string()),
            url: "https://app.temujanji.id/checkout/pro".to_string(),
            display_order: 1,
        };

        let row = svc.upsert(dto.clone()).await.unwrap();
        let again = svc.upsert(dto).await.unwrap();
        assert_eq!(row.id, again.id);

        let urls = svc.get_urls().await;
        assert_eq!(urls["pricing"]["pro"].label, "Langganan Pro");

        svc.delete(row.id).await.unwrap();
        assert_eq!(svc.get_urls().await, default_urls());
    }
}
