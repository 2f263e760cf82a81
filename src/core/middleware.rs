use crate::core::error::AppError;
use crate::features::auth::JwtValidator;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Basic auth in front of the Swagger UI
pub async fn basic_auth_middleware(
    State(valid_credentials): State<Arc<String>>,
    req: Request,
    next: Next,
) -> Response {
    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Basic "))
        .and_then(|encoded| BASE64_STANDARD.decode(encoded).ok())
        .and_then(|decoded| String::from_utf8(decoded).ok())
        .is_some_and(|creds| creds == *valid_credentials);

    if authorized {
        return next.run(req).await;
    }

    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")],
        Body::from("Unauthorized"),
    )
        .into_response()
}

pub async fn auth_middleware(
    State(validator): State<Arc<JwtValidator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })?;

    let admin = validator.validate_token(token)?;

    req.extensions_mut().insert(admin);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use crate::features::auth::model::{AdminUser, AuthenticatedAdmin};
    use crate::features::auth::services::TokenService;
    use axum::{middleware::from_fn_with_state, routing::get, Router};
    use axum_test::TestServer;
    use std::time::Duration;

    const SECRET: &str = "middleware-test-secret-0123456789";

    async fn protected(admin: AuthenticatedAdmin) -> String {
        admin.email
    }

    fn server() -> TestServer {
        let validator = Arc::new(JwtValidator::new(SECRET, Duration::ZERO));
        let app = Router::new()
            .route("/protected", get(protected))
            .route_layer(from_fn_with_state(validator, auth_middleware));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        server().get("/protected").await.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_non_bearer_header_is_unauthorized() {
        server()
            .get("/protected")
            .add_header(header::AUTHORIZATION, "Token abc")
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let config = AuthConfig {
            jwt_secret: SECRET.to_string(),
            jwt_ttl: Duration::from_secs(600),
            jwt_leeway: Duration::ZERO,
            admin_email: None,
            admin_password: None,
        };
        let admin = AdminUser {
            id: Uuid::new_v4(),
            email: "admin@temujanji.test".to_string(),
            name: "Admin".to_string(),
            password_hash: String::new(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let token = TokenService::new(&config).issue(&admin).unwrap();

        let response = server()
            .get("/protected")
            .authorization_bearer(&token.access_token)
            .await;
        response.assert_status_ok();
        response.assert_text("admin@temujanji.test");
    }

    #[tokio::test]
    async fn test_basic_auth_guards_swagger() {
        let app = Router::new()
            .route("/docs", get(|| async { "docs" }))
            .layer(from_fn_with_state(
                Arc::new("user:pass".to_string()),
                basic_auth_middleware,
            ));
        let server = TestServer::new(app).unwrap();

        server.get("/docs").await.assert_status_unauthorized();

        let encoded = BASE64_STANDARD.encode("user:pass");
        server
            .get("/docs")
            .add_header(header::AUTHORIZATION, format!("Basic {}", encoded))
            .await
            .assert_status_ok();
    }
}
