use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::testimonials::{handlers, services::TestimonialService};

pub fn public_routes(service: Arc<TestimonialService>) -> Router {
    Router::new()
        .route("/api/testimonials", get(handlers::list_public_testimonials))
        .with_state(service)
}

pub fn admin_routes(service: Arc<TestimonialService>) -> Router {
    Router::new()
        .route(
            "/api/admin/testimonials",
            get(handlers::list_testimonials).post(handlers::create_testimonial),
        )
        .route(
            "/api/admin/testimonials/{id}",
            put(handlers::update_testimonial).delete(handlers::delete_testimonial),
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

    #[tokio::test]
    async fn test_out_of_range_rating_is_bad_request() {
        let service = Arc::new(TestimonialService::new(
            unreachable_pool(),
            Duration::from_secs(60),
        ));
        let server = TestServer::new(with_admin_auth(admin_routes(service))).unwrap();

        let response = server
            .post("/api/admin/testimonials")
            .json(&json!({ "name": "Sari", "quote": "Bagus", "rating": 7 }))
            .await;
        response.assert_status_bad_request();
    }
}
