use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::web::handlers;
use crate::features::web::state::WebState;

/// Public pages, admin shell pages and the HTML 404 fallback
pub fn routes(state: Arc<WebState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/faq", get(handlers::faq))
        .route("/fitur/{slug}", get(handlers::feature))
        .route("/syarat-ketentuan", get(handlers::terms))
        .route("/kebijakan-privasi", get(handlers::privacy))
        .route("/menjadi-reseller", get(handlers::reseller))
        .route("/tentang-kami", get(handlers::about))
        .route("/kontak", get(handlers::contact))
        .route("/blog", get(handlers::blog_index))
        .route("/blog/{slug}", get(handlers::blog_post))
        .route("/admin/login", get(handlers::admin_login))
        .route("/admin/dashboard", get(handlers::admin_dashboard))
        .route("/admin/{section}", get(handlers::admin_section))
        .fallback(handlers::not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SiteConfig;
    use crate::core::database::unreachable_pool;
    use crate::features::blog::{CategoryService, PostService};
    use crate::features::brand_logos::BrandLogoService;
    use crate::features::faqs::FaqService;
    use crate::features::site_pages::SitePageService;
    use crate::features::site_urls::SiteUrlService;
    use crate::features::testimonials::TestimonialService;
    use crate::features::web::engine::PageRenderer;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use std::time::Duration;

    /// Every service points at a database that cannot be reached
    fn server() -> TestServer {
        let pool = unreachable_pool();
        let ttl = Duration::from_secs(60);
        let state = WebState {
            renderer: PageRenderer::new(&SiteConfig::default()).unwrap(),
            posts: Arc::new(PostService::new(pool.clone(), ttl)),
            categories: Arc::new(CategoryService::new(pool.clone(), ttl)),
            urls: Arc::new(SiteUrlService::new(pool.clone(), ttl)),
            faqs: Arc::new(FaqService::new(pool.clone(), ttl)),
            testimonials: Arc::new(TestimonialService::new(pool.clone(), ttl)),
            brand_logos: Arc::new(BrandLogoService::new(pool.clone(), ttl)),
            pages: Arc::new(SitePageService::new(pool, ttl)),
        };
        TestServer::new(routes(Arc::new(state))).unwrap()
    }

    #[tokio::test]
    async fn test_home_renders_default_ctas_when_database_is_down() {
        let response = server().get("/").await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Mulai Gratis"));
        assert!(html.contains("Lihat Demo"));
    }

    #[tokio::test]
    async fn test_faq_renders_default_entries() {
        let response = server().get("/faq").await;
        response.assert_status_ok();
        assert!(response.text().contains("<details"));
    }

    #[tokio::test]
    async fn test_known_feature_renders() {
        let response = server().get("/fitur/integrasi-kalender").await;
        response.assert_status_ok();
        assert!(response.text().contains("Integrasi Kalender"));
    }

    #[tokio::test]
    async fn test_unknown_feature_is_404_page() {
        let response = server().get("/fitur/teleportasi").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("Halaman tidak ditemukan"));
    }

    #[tokio::test]
    async fn test_legal_pages_use_built_in_text() {
        let server = server();

        let terms = server.get("/syarat-ketentuan").await;
        terms.assert_status_ok();
        assert!(terms.text().contains("Syarat dan Ketentuan"));

        let privacy = server.get("/kebijakan-privasi").await;
        privacy.assert_status_ok();
        assert!(privacy.text().contains("Kebijakan Privasi"));

        server.get("/tentang-kami").await.assert_status_ok();
        server.get("/kontak").await.assert_status_ok();
        server.get("/menjadi-reseller").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_blog_index_shows_notice_when_posts_cannot_load() {
        let response = server().get("/blog?page=abc&category=Tips").await;
        response.assert_status_ok();
        assert!(response.text().contains("Artikel belum dapat dimuat"));
    }

    #[tokio::test]
    async fn test_blog_post_unavailable_when_database_is_down() {
        server()
            .get("/blog/cara-atur-jadwal")
            .await
            .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_admin_shell_pages() {
        let server = server();

        server.get("/admin/login").await.assert_status_ok();

        let dashboard = server.get("/admin/dashboard").await;
        dashboard.assert_status_ok();
        assert!(dashboard.text().contains("/api/admin/dashboard"));

        let logos = server.get("/admin/brand-logos").await;
        logos.assert_status_ok();
        assert!(logos.text().contains("/api/admin/brand-logos"));

        server
            .get("/admin/settings")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_404_page() {
        let response = server().get("/harga-lama").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("Halaman tidak ditemukan"));
    }
}
