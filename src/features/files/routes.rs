use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, post},
    Router,
};
use std::sync::Arc;

use crate::features::files::dtos::MAX_FILE_SIZE;
use crate::features::files::handlers::{delete_file_by_url, upload_file};
use crate::features::files::services::FileService;

pub fn admin_routes(service: Arc<FileService>) -> Router {
    Router::new()
        .route(
            "/api/admin/files/upload",
            // Headroom for multipart framing
            post(upload_file).layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 1024 * 1024)),
        )
        .route("/api/admin/files", delete(delete_file_by_url))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StorageConfig;
    use crate::core::database::unreachable_pool;
    use crate::modules::storage::StorageClient;
    use crate::shared::test_helpers::with_admin_auth;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> TestServer {
        let storage = StorageClient::new(&StorageConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            public_endpoint: "http://media.test".to_string(),
            access_key: "test".to_string(),
            secret_key: "test".to_string(),
            bucket: "media".to_string(),
            region: "us-east-1".to_string(),
            prefix: "public".to_string(),
        })
        .unwrap();
        let service = Arc::new(FileService::new(unreachable_pool(), Arc::new(storage)));
        TestServer::new(with_admin_auth(admin_routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_upload_without_file_is_bad_request() {
        let form = MultipartForm::new().add_text("purpose", "cover_image");

        let response = server()
            .post("/api/admin/files/upload")
            .multipart(form)
            .await;
        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "File wajib diunggah");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_image() {
        let part = Part::bytes(b"%PDF-1.4".as_slice())
            .file_name("doc.pdf")
            .mime_type("application/pdf");
        let form = MultipartForm::new().add_part("file", part);

        server()
            .post("/api/admin/files/upload")
            .multipart(form)
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_delete_requires_valid_url() {
        server()
            .delete("/api/admin/files")
            .json(&json!({ "url": "not a url" }))
            .await
            .assert_status_bad_request();
    }
}
