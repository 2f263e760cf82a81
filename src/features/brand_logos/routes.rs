use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::brand_logos::{handlers, services::BrandLogoService};

pub fn public_routes(service: Arc<BrandLogoService>) -> Router {
    Router::new()
        .route("/api/brand-logos", get(handlers::list_public_brand_logos))
        .with_state(service)
}

pub fn admin_routes(service: Arc<BrandLogoService>) -> Router {
    Router::new()
        .route(
            "/api/admin/brand-logos",
            get(handlers::list_brand_logos).post(handlers::create_brand_logo),
        )
        .route(
            "/api/admin/brand-logos/{id}",
            put(handlers::update_brand_logo).delete(handlers::delete_brand_logo),
        )
        .with_state(service)
}
