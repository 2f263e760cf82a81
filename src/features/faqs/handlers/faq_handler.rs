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
use crate::features::faqs::dtos::{FaqFormDto, FaqResponseDto};
use crate::features::faqs::services::FaqService;
use crate::shared::types::ApiResponse;

/// Active FAQs
#[utoipa::path(
    get,
    path = "/api/faqs",
    responses(
        (status = 200, description = "Active FAQs", body = ApiResponse<Vec<FaqResponseDto>>),
    ),
    tag = "faqs"
)]
pub async fn list_public_faqs(
    State(service): State<Arc<FaqService>>,
) -> Json<ApiResponse<Vec<FaqResponseDto>>> {
    Json(ApiResponse::success(Some(service.list_active().await), None, None))
}

/// All FAQs
#[utoipa::path(
    get,
    path = "/api/admin/faqs",
    responses(
        (status = 200, description = "FAQs", body = ApiResponse<Vec<FaqResponseDto>>),
    ),
    tag = "faqs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_faqs(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<FaqService>>,
) -> Result<Json<ApiResponse<Vec<FaqResponseDto>>>> {
    let faqs = service.list().await?;
    Ok(Json(ApiResponse::success(Some(faqs), None, None)))
}

/// Create a FAQ
#[utoipa::path(
    post,
    path = "/api/admin/faqs",
    request_body = FaqFormDto,
    responses(
        (status = 201, description = "Created", body = ApiResponse<FaqResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "faqs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_faq(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<FaqService>>,
    AppJson(dto): AppJson<FaqFormDto>,
) -> Result<(StatusCode, Json<ApiResponse<FaqResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let faq = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(faq), None, None)),
    ))
}

/// Update a FAQ
#[utoipa::path(
    put,
    path = "/api/admin/faqs/{id}",
    params(
        ("id" = Uuid, Path, description = "FAQ ID")
    ),
    request_body = FaqFormDto,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<FaqResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not found")
    ),
    tag = "faqs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_faq(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<FaqService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<FaqFormDto>,
) -> Result<Json<ApiResponse<FaqResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let faq = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(faq), None, None)))
}

/// Delete a FAQ
#[utoipa::path(
    delete,
    path = "/api/admin/faqs/{id}",
    params(
        ("id" = Uuid, Path, description = "FAQ ID")
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    ),
    tag = "faqs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_faq(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<FaqService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
