use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::site_pages::{handlers, services::SitePageService};

pub fn public_routes(service: Arc<SitePageService>) -> Router {
    Router::new()
        .route("/api/pages/{key}", get(handlers::get_page))
        .with_state(service)
}

pub fn admin_routes(service: Arc<SitePageService>) -> Router {
    Router::new()
        .route("/api/admin/pages", get(handlers::list_pages))
        .route("/api/admin/pages/{key}", put(handlers::update_page))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::unreachable_pool;
    use crate::shared::test_helpers::with_admin_auth;
    use axum_test::TestServer;
    use serde_json::json;
    use std::time::Duration;

    fn service() -> Arc<SitePageService> {
        Arc::new(SitePageService::new(unreachable_pool(), Duration::from_secs(60)))
    }

    #[tokio::test]
    async fn test_unknown_page_is_not_found() {
        let server = TestServer::new(public_routes(service())).unwrap();
        server.get("/api/pages/careers").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_known_page_served_from_defaults() {
        let server = TestServer::new(public_routes(service())).unwrap();
        let response = server.get("/api/pages/privacy").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["key"], "privacy");
        assert_eq!(body["data"]["title"], "Kebijakan Privasi");
    }

    #[tokio::test]
    async fn test_blank_content_is_bad_request() {
        let server = TestServer::new(with_admin_auth(admin_routes(service()))).unwrap();
        server
            .put("/api/admin/pages/about")
            .json(&json!({ "title": "Tentang", "content": "" }))
            .await
            .assert_status_bad_request();
    }
}
