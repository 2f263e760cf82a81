use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::site_pages::dtos::{SitePageDto, UpdateSitePageDto};
use crate::features::site_pages::models::PageKey;
use crate::features::site_pages::services::SitePageService;
use crate::shared::types::ApiResponse;

fn parse_key(key: &str) -> Result<PageKey> {
    key.parse::<PageKey>()
        .map_err(|_| AppError::NotFound(format!("Halaman '{}' tidak ditemukan", key)))
}

/// Get a static page
#[utoipa::path(
    get,
    path = "/api/pages/{key}",
    params(
        ("key" = String, Path, description = "about, contact, terms or privacy")
    ),
    responses(
        (status = 200, description = "Page", body = ApiResponse<SitePageDto>),
        (status = 404, description = "Unknown page key")
    ),
    tag = "site-pages"
)]
pub async fn get_page(
    State(service): State<Arc<SitePageService>>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<SitePageDto>>> {
    let page = service.get(parse_key(&key)?).await;
    Ok(Json(ApiResponse::success(Some(page), None, None)))
}

/// All static pages
#[utoipa::path(
    get,
    path = "/api/admin/pages",
    responses(
        (status = 200, description = "Pages", body = ApiResponse<Vec<SitePageDto>>),
    ),
    tag = "site-pages",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_pages(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<SitePageService>>,
) -> Result<Json<ApiResponse<Vec<SitePageDto>>>> {
    let pages = service.list().await?;
    Ok(Json(ApiResponse::success(Some(pages), None, None)))
}

/// Replace a static page
#[utoipa::path(
    put,
    path = "/api/admin/pages/{key}",
    params(
        ("key" = String, Path, description = "about, contact, terms or privacy")
    ),
    request_body = UpdateSitePageDto,
    responses(
        (status = 200, description = "Saved", body = ApiResponse<SitePageDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown page key")
    ),
    tag = "site-pages",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_page(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<SitePageService>>,
    Path(key): Path<String>,
    AppJson(dto): AppJson<UpdateSitePageDto>,
) -> Result<Json<ApiResponse<SitePageDto>>> {
    let key = parse_key(&key)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let page = service.upsert(key, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(page),
        Some("Halaman berhasil disimpan".to_string()),
        None,
    )))
}
