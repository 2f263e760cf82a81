use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::site_urls::{handlers, services::SiteUrlService};

pub fn public_routes(service: Arc<SiteUrlService>) -> Router {
    Router::new()
        .route("/api/urls", get(handlers::get_urls))
        .with_state(service)
}

pub fn admin_routes(service: Arc<SiteUrlService>) -> Router {
    Router::new()
        .route(
            "/api/admin/urls",
            get(handlers::list_urls).put(handlers::upsert_url),
        )
        .route("/api/admin/urls/{id}", delete(handlers::delete_url))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::unreachable_pool;
    use crate::features::site_urls::defaults::default_urls;
    use axum_test::TestServer;
    use std::time::Duration;

    #[tokio::test]
    async fn test_public_urls_never_empty_when_database_is_down() {
        let service = Arc::new(SiteUrlService::new(unreachable_pool(), Duration::from_secs(60)));
        let server = TestServer::new(public_routes(service)).unwrap();

        let response = server.get("/api/urls").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"]["hero"]["primary_cta"]["url"],
            default_urls()["hero"]["primary_cta"].url
        );
    }
}
