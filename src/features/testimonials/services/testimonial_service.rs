use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::testimonials::dtos::{TestimonialFormDto, TestimonialResponseDto};
use crate::features::testimonials::models::Testimonial;
use crate::shared::cache::ContentCache;

const COLUMNS: &str = "id, name, role, company, quote, avatar_url, rating, display_order, \
     is_active, created_at, updated_at";

pub fn default_testimonials() -> Vec<TestimonialResponseDto> {
    let entries = [
        (
            "Rina Wulandari",
            "HR Manager",
            "PT Sinar Niaga",
            "Jadwal interview kandidat sekarang beres dalam hitungan menit, bukan hari.",
        ),
        (
            "Andi Pratama",
            "Founder",
            "Kopi Kawan",
            "Tim kami tidak pernah lagi bentrok jadwal rapat sejak pakai Temujanji.",
        ),
        (
            "Dewi Lestari",
            "Konsultan Pajak",
            "Lestari & Rekan",
            "Klien bisa pilih jam konsultasi sendiri, pengingatnya juga otomatis.",
        ),
    ];

    entries
        .iter()
        .zip(1..)
        .map(|((name, role, company, quote), order)| TestimonialResponseDto {
            id: Uuid::nil(),
            name: name.to_string(),
            role: Some(role.to_string()),
            company: Some(company.to_string()),
            quote: quote.to_string(),
            avatar_url: None,
            rating: 5,
            display_order: order,
            is_active: true,
            updated_at: DateTime::<Utc>::default(),
        })
        .collect()
}

pub struct TestimonialService {
    pool: PgPool,
    cache: ContentCache<Vec<TestimonialResponseDto>>,
}

impl TestimonialService {
    pub fn new(pool: PgPool, cache_ttl: Duration) -> Self {
        Self {
            pool,
            cache: ContentCache::new(cache_ttl),
        }
    }

    /// Active testimonials for the landing page; never fails
    pub async fn list_active(&self) -> Vec<TestimonialResponseDto> {
        self.cache
            .load_or_fallback("testimonials", || self.fetch(true), default_testimonials)
            .await
    }

    pub async fn list(&self) -> Result<Vec<TestimonialResponseDto>> {
        self.fetch(false).await
    }

    pub async fn create(&self, dto: TestimonialFormDto) -> Result<TestimonialResponseDto> {
        let query = format!(
            r#"
            INSERT INTO testimonials (name, role, company, quote, avatar_url, rating, display_order, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            COLUMNS
        );

        let testimonial = sqlx::query_as::<_, Testimonial>(&query)
            .bind(dto.name.trim())
            .bind(dto.role)
            .bind(dto.company)
            .bind(dto.quote.trim())
            .bind(dto.avatar_url)
            .bind(dto.rating)
            .bind(dto.display_order)
            .bind(dto.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create testimonial: {:?}", e);
                AppError::Database(e)
            })?;

        self.cache.invalidate().await;
        Ok(testimonial.into())
    }

    pub async fn update(&self, id: Uuid, dto: TestimonialFormDto) -> Result<TestimonialResponseDto> {
        let query = format!(
            r#"
            UPDATE testimonials
            SET name = $1, role = $2, company = $3, quote = $4, avatar_url = $5,
                rating = $6, display_order = $7, is_active = $8, updated_at = NOW()
            WHERE id = $9
            RETURNING {}
            "#,
            COLUMNS
        );

        let testimonial = sqlx::query_as::<_, Testimonial>(&query)
            .bind(dto.name.trim())
            .bind(dto.role)
            .bind(dto.company)
            .bind(dto.quote.trim())
            .bind(dto.avatar_url)
            .bind(dto.rating)
            .bind(dto.display_order)
            .bind(dto.is_active)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update testimonial {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| {
                AppError::NotFound(format!("Testimoni dengan id {} tidak ditemukan", id))
            })?;

        self.cache.invalidate().await;
        Ok(testimonial.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete testimonial {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Testimoni dengan id {} tidak ditemukan",
                id
            )));
        }

        self.cache.invalidate().await;
        Ok(())
    }

    async fn fetch(&self, active_only: bool) -> Result<Vec<TestimonialResponseDto>> {
        let query = format!(
            r#"
            SELECT {} FROM testimonials
            WHERE ($1 = FALSE OR is_active = TRUE)
            ORDER BY display_order, created_at
            "#,
            COLUMNS
        );

        let rows = sqlx::query_as::<_, Testimonial>(&query)
            .bind(active_only)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch testimonials: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(TestimonialResponseDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::unreachable_pool;

    #[tokio::test]
    async fn test_list_active_falls_back_to_defaults() {
        let svc = TestimonialService::new(unreachable_pool(), Duration::from_secs(60));
        let list = svc.list_active().await;
        assert_eq!(list.len(), default_testimonials().len());
        assert!(list.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_update_and_delete(pool: PgPool) {
        let svc = TestimonialService::new(pool, Duration::from_secs(60));
        let form = TestimonialFormDto {
            name: "Sari".to_string(),
            role: Some(" ".to_string()),
            company: None,
            quote: "Sangat membantu".to_string(),
            avatar_url: None,
            rating: 4,
            display_order: 0,
            is_active: true,
        };

        let created = svc.create(form.clone()).await.unwrap();
        assert_eq!(created.role, None);

        let updated = svc
            .update(created.id, TestimonialFormDto { rating: 5, ..form })
            .await
            .unwrap();
        assert_eq!(updated.rating, 5);

        svc.delete(created.id).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }
}
