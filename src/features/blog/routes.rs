use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::blog::handlers;
use crate::features::blog::services::{CategoryService, PostService};

/// Public blog routes
pub fn public_routes(posts: Arc<PostService>, categories: Arc<CategoryService>) -> Router {
    let post_routes = Router::new()
        .route("/api/blog/posts", get(handlers::list_public_posts))
        .route("/api/blog/posts/{slug}", get(handlers::get_public_post))
        .with_state(posts);

    let category_routes = Router::new()
        .route("/api/blog/categories", get(handlers::list_public_categories))
        .with_state(categories);

    post_routes.merge(category_routes)
}

/// Admin blog routes (must sit behind the auth middleware)
pub fn admin_routes(posts: Arc<PostService>, categories: Arc<CategoryService>) -> Router {
    let post_routes = Router::new()
        .route(
            "/api/admin/posts",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route(
            "/api/admin/posts/{id}",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
        .route("/api/admin/posts/{id}/publish", post(handlers::publish_post))
        .with_state(posts);

    let category_routes = Router::new()
        .route(
            "/api/admin/blog-categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/api/admin/blog-categories/{id}",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        .with_state(categories);

    post_routes.merge(category_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::unreachable_pool;
    use crate::shared::test_helpers::with_admin_auth;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use std::time::Duration;

    fn admin_server() -> TestServer {
        let pool = unreachable_pool();
        let posts = Arc::new(PostService::new(pool.clone(), Duration::from_secs(60)));
        let categories = Arc::new(CategoryService::new(pool, Duration::from_secs(60)));
        TestServer::new(with_admin_auth(admin_routes(posts, categories))).unwrap()
    }

    #[tokio::test]
    async fn test_admin_routes_require_admin() {
        let pool = unreachable_pool();
        let posts = Arc::new(PostService::new(pool.clone(), Duration::from_secs(60)));
        let categories = Arc::new(CategoryService::new(pool, Duration::from_secs(60)));
        let server = TestServer::new(admin_routes(posts, categories)).unwrap();

        server
            .post("/api/admin/posts")
            .json(&json!({ "title": "Judul", "content": "Isi" }))
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_create_with_empty_title_is_bad_request() {
        let response = admin_server()
            .post("/api/admin/posts")
            .json(&json!({ "title": "", "content": "Isi artikel" }))
            .await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Judul wajib diisi");
    }

    #[tokio::test]
    async fn test_update_with_empty_content_is_bad_request() {
        let response = admin_server()
            .put(&format!("/api/admin/posts/{}", uuid::Uuid::new_v4()))
            .json(&json!({ "title": "Judul", "content": "   " }))
            .await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Konten wajib diisi");
    }

    #[tokio::test]
    async fn test_unknown_status_is_rejected() {
        admin_server()
            .post("/api/admin/posts")
            .json(&json!({ "title": "Judul", "content": "Isi", "status": "archived" }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_public_categories_fall_back_when_database_is_down() {
        let pool = unreachable_pool();
        let posts = Arc::new(PostService::new(pool.clone(), Duration::from_secs(60)));
        let categories = Arc::new(CategoryService::new(pool, Duration::from_secs(60)));
        let server = TestServer::new(public_routes(posts, categories)).unwrap();

        let response = server.get("/api/blog/categories").await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"], json!([]));
    }
}
