use std::time::Duration;

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::faqs::dtos::{FaqFormDto, FaqResponseDto};
use crate::features::faqs::models::Faq;
use crate::shared::cache::ContentCache;

/// Built-in FAQ shown when the table cannot be read
pub fn default_faqs() -> Vec<FaqResponseDto> {
    let entries = [
        (
            "Apa itu Temujanji?",
            "Temujanji adalah aplikasi penjadwalan rapat yang menyinkronkan kalender tim dan \
             mengirim pengingat otomatis ke semua peserta.",
        ),
        (
            "Apakah ada paket gratis?",
            "Ada. Paket Gratis bisa dipakai selamanya untuk satu kalender dan jadwal rapat tanpa batas.",
        ),
        (
            "Kalender apa saja yang didukung?",
            "Google Calendar, Microsoft Outlook dan kalender berbasis CalDAV.",
        ),
        (
            "Bagaimana cara menjadi reseller?",
            "Isi formulir di halaman Menjadi Reseller, tim kemitraan kami akan menghubungi Anda.",
        ),
    ];

    let epoch = Utc.timestamp_opt(0, 0).single().unwrap_or_default();
    entries
        .iter()
        .zip(1..)
        .map(|((question, answer), order)| FaqResponseDto {
            id: Uuid::nil(),
            question: question.to_string(),
            answer: answer.to_string(),
            display_order: order,
            is_active: true,
            updated_at: epoch,
        })
        .collect()
}

pub struct FaqService {
    pool: PgPool,
    cache: ContentCache<Vec<FaqResponseDto>>,
}

impl FaqService {
    pub fn new(pool: PgPool, cache_ttl: Duration) -> Self {
        Self {
            pool,
            cache: ContentCache::new(cache_ttl),
        }
    }

    /// Active FAQs for the public pages; never fails
    pub async fn list_active(&self) -> Vec<FaqResponseDto> {
        self.cache
            .load_or_fallback("faqs", || self.fetch(true), default_faqs)
            .await
    }

    /// Every FAQ including inactive ones (admin)
    pub async fn list(&self) -> Result<Vec<FaqResponseDto>> {
        self.fetch(false).await
    }

    pub async fn create(&self, dto: FaqFormDto) -> Result<FaqResponseDto> {
        let faq = sqlx::query_as::<_, Faq>(
            r#"
            INSERT INTO faqs (question, answer, display_order, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, display_order, is_active, created_at, updated_at
            "#,
        )
        .bind(dto.question.trim())
        .bind(dto.answer.trim())
        .bind(dto.display_order)
        .bind(dto.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create faq: {:?}", e);
            AppError::Database(e)
        })?;

        self.cache.invalidate().await;
        Ok(faq.into())
    }

    pub async fn update(&self, id: Uuid, dto: FaqFormDto) -> Result<FaqResponseDto> {
        let faq = sqlx::query_as::<_, Faq>(
            r#"
            UPDATE faqs
            SET question = $1, answer = $2, display_order = $3, is_active = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING id, question, answer, display_order, is_active, created_at, updated_at
            "#,
        )
        .bind(dto.question.trim())
        .bind(dto.answer.trim())
        .bind(dto.display_order)
        .bind(dto.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update faq {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("FAQ dengan id {} tidak ditemukan", id)))?;

        self.cache.invalidate().await;
        Ok(faq.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete faq {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("FAQ dengan id {} tidak ditemukan", id)));
        }

        self.cache.invalidate().await;
        Ok(())
    }

    async fn fetch(&self, active_only: bool) -> Result<Vec<FaqResponseDto>> {
        let faqs = sqlx::query_as::<_, Faq>(
            r#"
            SELECT id, question, answer, display_order, is_active, created_at, updated_at
            FROM faqs
            WHERE ($1 = FALSE OR is_active = TRUE)
            ORDER BY display_order, created_at
            "#,
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch faqs: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(faqs.into_iter().map(FaqResponseDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::unreachable_pool;

    #[tokio::test]
    async fn test_list_active_falls_back_to_defaults() {
        let svc = FaqService::new(unreachable_pool(), Duration::from_secs(60));
        let faqs = svc.list_active().await;
        assert_eq!(faqs.len(), default_faqs().len());
        assert!(faqs.iter().all(|f| f.is_active));
    }

    #[tokio::test]
    async fn test_admin_list_reports_database_error() {
        let svc = FaqService::new(unreachable_pool(), Duration::from_secs(60));
        assert!(matches!(svc.list().await, Err(AppError::Database(_))));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_inactive_faq_hidden_from_public_list(pool: PgPool) {
        let svc = FaqService::new(pool, Duration::from_secs(60));

        let visible = svc
            .create(FaqFormDto {
                question: "Bisa dicoba gratis?".to_string(),
                answer: "Bisa.".to_string(),
                display_order: 1,
                is_active: true,
            })
            .await
            .unwrap();
        svc.create(FaqFormDto {
            question: "Draft".to_string(),
            answer: "Belum siap".to_string(),
            display_order: 2,
            is_active: false,
        })
        .await
        .unwrap();

        let public = svc.list_active().await;
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].id, visible.id);
        assert_eq!(svc.list().await.unwrap().len(), 2);
    }
}
