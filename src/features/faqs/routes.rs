use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::faqs::{handlers, services::FaqService};

pub fn public_routes(service: Arc<FaqService>) -> Router {
    Router::new()
        .route("/api/faqs", get(handlers::list_public_faqs))
        .with_state(service)
}

pub fn admin_routes(service: Arc<FaqService>) -> Router {
    Router::new()
        .route(
            "/api/admin/faqs",
            get(handlers::list_faqs).post(handlers::create_faq),
        )
        .route(
            "/api/admin/faqs/{id}",
            put(handlers::update_faq).delete(handlers::delete_faq),
        )
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

    fn service() -> Arc<FaqService> {
        Arc::new(FaqService::new(unreachable_pool(), Duration::from_secs(60)))
    }

    #[tokio::test]
    async fn test_blank_answer_is_bad_request() {
        let server = TestServer::new(with_admin_auth(admin_routes(service()))).unwrap();

        server
            .post("/api/admin/faqs")
            .json(&json!({ "question": "Gratis?", "answer": "   " }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_public_faqs_use_defaults_when_database_is_down() {
        let server = TestServer::new(public_routes(service())).unwrap();

        let response = server.get("/api/faqs").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert!(!body["data"].as_array().unwrap().is_empty());
    }
}
