use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use minijinja::context;

use crate::features::web::admin_sections::{find_section, AdminSection, ADMIN_SECTIONS, DASHBOARD};
use crate::features::web::state::WebState;

/// Admin pages are static shells; data and auth go through `/api/admin/*`
fn shell(state: &WebState, section: &AdminSection) -> Response {
    state.renderer.page(
        StatusCode::OK,
        "admin/shell.html",
        context! {
            section,
            sections => ADMIN_SECTIONS,
        },
    )
}

pub async fn admin_login(State(state): State<Arc<WebState>>) -> Response {
    state
        .renderer
        .page(StatusCode::OK, "admin/login.html", context! {})
}

pub async fn admin_dashboard(State(state): State<Arc<WebState>>) -> Response {
    shell(&state, &DASHBOARD)
}

pub async fn admin_section(
    State(state): State<Arc<WebState>>,
    Path(slug): Path<String>,
) -> Response {
    match find_section(&slug) {
        Some(section) => shell(&state, section),
        None => state.renderer.page(
            StatusCode::NOT_FOUND,
            "status.html",
            context! {
                title => "Halaman tidak ditemukan",
                message => "Bagian admin ini tidak ada.",
            },
        ),
    }
}
