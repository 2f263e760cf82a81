use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::brand_logos::dtos::{BrandLogoFormDto, BrandLogoResponseDto};
use crate::features::brand_logos::services::BrandLogoService;
use crate::shared::types::ApiResponse;

/// Active brand logos
#[utoipa::path(
    get,
    path = "/api/brand-logos",
    responses(
        (status = 200, description = "Active brand logos", body = ApiResponse<Vec<BrandLogoResponseDto>>),
    ),
    tag = "brand-logos"
)]
pub async fn list_public_brand_logos(
    State(service): State<Arc<BrandLogoService>>,
) -> Json<ApiResponse<Vec<BrandLogoResponseDto>>> {
    Json(ApiResponse::success(Some(service.list_active().await), None, None))
}

/// All brand logos
#[utoipa::path(
    get,
    path = "/api/admin/brand-logos",
    responses(
        (status = 200, description = "Brand logos", body = ApiResponse<Vec<BrandLogoResponseDto>>),
    ),
    tag = "brand-logos",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_brand_logos(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<BrandLogoService>>,
) -> Result<Json<ApiResponse<Vec<BrandLogoResponseDto>>>> {
    let list = service.list().await?;
    Ok(Json(ApiResponse::success(Some(list), None, None)))
}

/// Create a brand logo
#[utoipa::path(
    post,
    path = "/api/admin/brand-logos",
    request_body = BrandLogoFormDto,
    responses(
        (status = 201, description = "Created", body = ApiResponse<BrandLogoResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "brand-logos",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_brand_logo(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<BrandLogoService>>,
    AppJson(dto): AppJson<BrandLogoFormDto>,
) -> Result<(StatusCode, Json<ApiResponse<BrandLogoResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let logo = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(logo), None, None)),
    ))
}

/// Update a brand logo
#[utoipa::path(
    put,
    path = "/api/admin/brand-logos/{id}",
    params(
        ("id" = Uuid, Path, description = "Logo ID")
    ),
    request_body = BrandLogoFormDto,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<BrandLogoResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not found")
    ),
    tag = "brand-logos",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_brand_logo(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<BrandLogoService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<BrandLogoFormDto>,
) -> Result<Json<ApiResponse<BrandLogoResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let logo = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(logo), None, None)))
}

/// Delete a brand logo
#[utoipa::path(
    delete,
    path = "/api/admin/brand-logos/{id}",
    params(
        ("id" = Uuid, Path, description = "Logo ID")
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    ),
    tag = "brand-logos",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_brand_logo(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<BrandLogoService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
