use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::{DashboardSummaryDto, SummaryRow};

pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Counts for every content type in one round trip
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let row = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM blog_posts) AS posts_total,
                (SELECT COUNT(*) FROM blog_posts WHERE status = 'draft') AS posts_draft,
                (SELECT COUNT(*) FROM blog_posts WHERE status = 'published') AS posts_published,
                (SELECT COUNT(*) FROM blog_posts WHERE status = 'scheduled') AS posts_scheduled,
                (SELECT COUNT(*) FROM blog_categories) AS categories,
                (SELECT COUNT(*) FROM faqs) AS faqs,
                (SELECT COUNT(*) FROM testimonials) AS testimonials,
                (SELECT COUNT(*) FROM brand_logos) AS brand_logos,
                (SELECT COUNT(*) FROM site_urls) AS site_urls
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get dashboard summary: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::unreachable_pool;

    #[tokio::test]
    async fn test_summary_propagates_database_errors() {
        let service = DashboardService::new(unreachable_pool());
        assert!(matches!(
            service.get_summary().await,
            Err(AppError::Database(_))
        ));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_summary_counts_posts_by_status(pool: PgPool) {
        sqlx::query(
            "INSERT INTO blog_posts (title, slug, content, author, status) \
             VALUES ('A', 'a', 'x', 'Tim', 'draft'), ('B', 'b', 'x', 'Tim', 'draft')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let summary = DashboardService::new(pool).get_summary().await.unwrap();
        assert_eq!(summary.posts.total, 2);
        assert_eq!(summary.posts.draft, 2);
        assert_eq!(summary.posts.published, 0);
    }
}
