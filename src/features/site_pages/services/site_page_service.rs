use std::collections::BTreeMap;
use std::time::Duration;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::site_pages::dtos::{SitePageDto, UpdateSitePageDto};
use crate::features::site_pages::models::{PageKey, SitePage};
use crate::shared::cache::ContentCache;

type PageMap = BTreeMap<PageKey, SitePageDto>;

/// Built-in text for a page
pub fn default_page(key: PageKey) -> SitePageDto {
    let (title, content) = match key {
        PageKey::About => (
            "Tentang Kami",
            "Temujanji membantu tim di Indonesia menjadwalkan rapat tanpa bolak-balik pesan.\n\n\
             Kami percaya waktu adalah aset paling berharga, jadi kami membangun alat yang \
             membuat setiap janji temu mudah dibuat dan ditepati.",
        ),
        PageKey::Contact => (
            "Kontak",
            "Punya pertanyaan? Tim kami siap membantu.\n\n\
             Email: halo@temujanji.id\n\n\
             Jam layanan: Senin sampai Jumat, 09.00 sampai 17.00 WIB.",
        ),
        PageKey::Terms => (
            "Syarat dan Ketentuan",
            "Dengan menggunakan Temujanji Anda menyetujui syarat dan ketentuan ini.\n\n\
             Akun bersifat pribadi dan tidak boleh dipindahtangankan. Kami dapat menangguhkan \
             akun yang menyalahgunakan layanan.\n\n\
             Ketentuan ini dapat berubah sewaktu-waktu dan versi terbaru selalu tersedia di halaman ini.",
        ),
        PageKey::Privacy => (
            "Kebijakan Privasi",
            "Kami hanya mengumpulkan data yang diperlukan untuk menjalankan layanan penjadwalan.\n\n\
             Data kalender Anda tidak pernah dijual kepada pihak ketiga.\n\n\
             Anda dapat meminta penghapusan data kapan saja melalui halo@temujanji.id.",
        ),
    };

    SitePageDto {
        key,
        title: title.to_string(),
        content: content.to_string(),
        updated_at: None,
    }
}

fn default_pages() -> PageMap {
    PageKey::ALL
        .into_iter()
        .map(|key| (key, default_page(key)))
        .collect()
}

pub struct SitePageService {
    pool: PgPool,
    cache: ContentCache<PageMap>,
}

impl SitePageService {
    pub fn new(pool: PgPool, cache_ttl: Duration) -> Self {
        Self {
            pool,
            cache: ContentCache::new(cache_ttl),
        }
    }

    /// Page content for the public site; never fails
    pub async fn get(&self, key: PageKey) -> SitePageDto {
        let pages = self
            .cache
            .load_or_fallback("site pages", || self.fetch_all(), default_pages)
            .await;

        pages.get(&key).cloned().unwrap_or_else(|| default_page(key))
    }

    /// All four pages straight from the database (admin)
    pub async fn list(&self) -> Result<Vec<SitePageDto>> {
        Ok(self.fetch_all().await?.into_values().collect())
    }

    pub async fn upsert(&self, key: PageKey, dto: UpdateSitePageDto) -> Result<SitePageDto> {
        let page = sqlx::query_as::<_, SitePage>(
            r#"
            INSERT INTO site_pages (key, title, content)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE
            SET title = EXCLUDED.title, content = EXCLUDED.content, updated_at = NOW()
            RETURNING key, title, content, updated_at
            "#,
        )
        .bind(key.as_str())
        .bind(dto.title.trim())
        .bind(dto.content.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save page {}: {:?}", key, e);
            AppError::Database(e)
        })?;

        tracing::info!("Site page saved: {}", key);
        self.cache.invalidate().await;

        Ok(SitePageDto {
            key,
            title: page.title,
            content: page.content,
            updated_at: Some(page.updated_at),
        })
    }

    /// Stored rows laid over the built-in pages
    async fn fetch_all(&self) -> Result<PageMap> {
        let rows = sqlx::query_as::<_, SitePage>(
            "SELECT key, title, content, updated_at FROM site_pages",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch site pages: {:?}", e);
            AppError::Database(e)
        })?;

        let mut pages = default_pages();
        for row in rows {
            let Ok(key) = row.key.parse::<PageKey>() else {
                tracing::debug!("Ignoring unknown site page {}", row.key);
                continue;
            };
            pages.insert(
                key,
                SitePageDto {
                    key,
                    title: row.title,
                    content: row.content,
                    updated_at: Some(row.updated_at),
                },
            );
        }
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::unreachable_pool;
    use crate::shared::text::split_paragraphs;

    #[test]
    fn test_every_page_has_default_text() {
        for key in PageKey::ALL {
            let page = default_page(key);
            assert!(!page.title.is_empty());
            assert!(!split_paragraphs(&page.content).is_empty());
        }
    }

    #[tokio::test]
    async fn test_get_falls_back_to_default_text() {
        let svc = SitePageService::new(unreachable_pool(), Duration::from_secs(60));
        assert_eq!(svc.get(PageKey::Terms).await, default_page(PageKey::Terms));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_upsert_replaces_default(pool: PgPool) {
        let svc = SitePageService::new(pool, Duration::from_secs(60));
        let dto = UpdateSitePageDto {
            title: "Tentang Temujanji".to_string(),
            content: "Isi baru.".to_string(),
        };

        svc.upsert(PageKey::About, dto.clone()).await.unwrap();
        let saved = svc.upsert(PageKey::About, dto).await.unwrap();
        assert!(saved.updated_at.is_some());

        let page = svc.get(PageKey::About).await;
        assert_eq!(page.title, "Tentang Temujanji");
        assert_eq!(svc.get(PageKey::Contact).await, default_page(PageKey::Contact));
        assert_eq!(svc.list().await.unwrap().len(), PageKey::ALL.len());
    }
}
