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
use crate::features::testimonials::dtos::{TestimonialFormDto, TestimonialResponseDto};
use crate::features::testimonials::services::TestimonialService;
use crate::shared::types::ApiResponse;

/// Active testimonials
#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses(
        (status = 200, description = "Active testimonials", body = ApiResponse<Vec<TestimonialResponseDto>>),
    ),
    tag = "testimonials"
)]
pub async fn list_public_testimonials(
    State(service): State<Arc<TestimonialService>>,
) -> Json<ApiResponse<Vec<TestimonialResponseDto>>> {
    Json(ApiResponse::success(Some(service.list_active().await), None, None))
}

/// All testimonials
#[utoipa::path(
    get,
    path = "/api/admin/testimonials",
    responses(
        (status = 200, description = "Testimonials", body = ApiResponse<Vec<TestimonialResponseDto>>),
    ),
    tag = "testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_testimonials(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
) -> Result<Json<ApiResponse<Vec<TestimonialResponseDto>>>> {
    let list = service.list().await?;
    Ok(Json(ApiResponse::success(Some(list), None, None)))
}

/// Create a testimonial
#[utoipa::path(
    post,
    path = "/api/admin/testimonials",
    request_body = TestimonialFormDto,
    responses(
        (status = 201, description = "Created", body = ApiResponse<TestimonialResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_testimonial(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    AppJson(dto): AppJson<TestimonialFormDto>,
) -> Result<(StatusCode, Json<ApiResponse<TestimonialResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let testimonial = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(testimonial), None, None)),
    ))
}

/// Update a testimonial
#[utoipa::path(
    put,
    path = "/api/admin/testimonials/{id}",
    params(
        ("id" = Uuid, Path, description = "Testimonial ID")
    ),
    request_body = TestimonialFormDto,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<TestimonialResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not found")
    ),
    tag = "testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_testimonial(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<TestimonialFormDto>,
) -> Result<Json<ApiResponse<TestimonialResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let testimonial = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(testimonial), None, None)))
}

/// Delete a testimonial
#[utoipa::path(
    delete,
    path = "/api/admin/testimonials/{id}",
    params(
        ("id" = Uuid, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    ),
    tag = "testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_testimonial(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
