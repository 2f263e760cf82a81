use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::site_urls::dtos::{SiteUrlResponseDto, UpsertSiteUrlDto, UrlMap};
use crate::features::site_urls::services::SiteUrlService;
use crate::shared::types::ApiResponse;

/// Resolved URL map for the public pages
#[utoipa::path(
    get,
    path = "/api/urls",
    responses(
        (status = 200, description = "Map of section -> key -> {label, url}"),
    ),
    tag = "site-urls"
)]
pub async fn get_urls(State(service): State<Arc<SiteUrlService>>) -> Json<ApiResponse<UrlMap>> {
    Json(ApiResponse::success(Some(service.get_urls().await), None, None))
}

/// Stored URL rows
#[utoipa::path(
    get,
    path = "/api/admin/urls",
    responses(
        (status = 200, description = "Rows", body = ApiResponse<Vec<SiteUrlResponseDto>>),
    ),
    tag = "site-urls",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_urls(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<SiteUrlService>>,
) -> Result<Json<ApiResponse<Vec<SiteUrlResponseDto>>>> {
    let rows = service.list().await?;
    Ok(Json(ApiResponse::success(Some(rows), None, None)))
}

/// Insert or replace a URL
#[utoipa::path(
    put,
    path = "/api/admin/urls",
    request_body = UpsertSiteUrlDto,
    responses(
        (status = 200, description = "Saved", body = ApiResponse<SiteUrlResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "site-urls",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upsert_url(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<SiteUrlService>>,
    AppJson(dto): AppJson<UpsertSiteUrlDto>,
) -> Result<Json<ApiResponse<SiteUrlResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let row = service.upsert(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(row),
        Some("URL berhasil disimpan".to_string()),
        None,
    )))
}

/// Remove a URL row
#[utoipa::path(
    delete,
    path = "/api/admin/urls/{id}",
    params(
        ("id" = Uuid, Path, description = "Row ID")
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Row not found")
    ),
    tag = "site-urls",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_url(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<SiteUrlService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
