use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Posts per status
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PostCountsDto {
    pub total: i64,
    pub draft: i64,
    pub published: i64,
    pub scheduled: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub posts: PostCountsDto,
    pub categories: i64,
    pub faqs: i64,
    pub testimonials: i64,
    pub brand_logos: i64,
    pub site_urls: i64,
}

/// Single-row result of the summary query
#[derive(Debug, FromRow)]
pub(crate) struct SummaryRow {
    pub posts_total: i64,
    pub posts_draft: i64,
    pub posts_published: i64,
    pub posts_scheduled: i64,
    pub categories: i64,
    pub faqs: i64,
    pub testimonials: i64,
    pub brand_logos: i64,
    pub site_urls: i64,
}

impl From<SummaryRow> for DashboardSummaryDto {
    fn from(row: SummaryRow) -> Self {
        Self {
            posts: PostCountsDto {
                total: row.posts_total,
                draft: row.posts_draft,
                published: row.posts_published,
                scheduled: row.posts_scheduled,
            },
            categories: row.categories,
            faqs: row.faqs,
            testimonials: row.testimonials,
            brand_logos: row.brand_logos,
            site_urls: row.site_urls,
        }
    }
}
