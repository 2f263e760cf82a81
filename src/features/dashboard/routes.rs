use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

pub fn admin_routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/admin/dashboard", get(handlers::get_summary))
        .with_state(service)
}
