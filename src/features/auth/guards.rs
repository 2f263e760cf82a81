//! Role guard for the admin API.
//!
//! `auth_middleware` only proves the token is valid; handlers that mutate
//! content also take [`RequireAdmin`] so the role is checked at the call site.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedAdmin;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking the caller is an admin.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(admin): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedAdmin);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = parts
            .extensions
            .get::<AuthenticatedAdmin>()
            .ok_or_else(|| AppError::Unauthorized("Admin not authenticated".to_string()))?;

        if !admin.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(admin.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_admin_user, with_admin_auth};
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    async fn whoami(RequireAdmin(admin): RequireAdmin) -> String {
        admin.email
    }

    #[tokio::test]
    async fn test_missing_admin_is_unauthorized() {
        let app = Router::new().route("/whoami", get(whoami));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/whoami").await;
        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_admin_passes_guard() {
        let app = with_admin_auth(Router::new().route("/whoami", get(whoami)));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/whoami").await;
        response.assert_status_ok();
        response.assert_text(create_admin_user().email);
    }

    #[tokio::test]
    async fn test_non_admin_role_is_forbidden() {
        async fn inject_editor(
            mut request: axum::extract::Request,
            next: axum::middleware::Next,
        ) -> axum::response::Response {
            let mut user = create_admin_user();
            user.role = "viewer".to_string();
            request.extensions_mut().insert(user);
            next.run(request).await
        }

        let app = Router::new()
            .route("/whoami", get(whoami))
            .layer(axum::middleware::from_fn(inject_editor));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/whoami").await;
        response.assert_status(axum::http::StatusCode::FORBIDDEN);
    }
}
