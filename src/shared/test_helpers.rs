#[cfg(test)]
use crate::features::auth::model::AuthenticatedAdmin;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedAdmin {
    AuthenticatedAdmin {
        id: uuid::Uuid::nil(),
        email: "admin@temujanji.test".to_string(),
        name: "Test Admin".to_string(),
        role: crate::shared::constants::ROLE_ADMIN.to_string(),
    }
}

#[cfg(test)]
async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_user());
    next.run(request).await
}

/// Wrap a router so every request carries an authenticated admin
#[cfg(test)]
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}
