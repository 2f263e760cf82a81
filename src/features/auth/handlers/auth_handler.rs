use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{AdminDto, AuthResponseDto, LoginRequestDto};
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/admin/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<AuthResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let auth_response = service.login(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(auth_response),
        Some("Berhasil masuk".to_string()),
        None,
    )))
}

/// Get the currently authenticated admin
#[utoipa::path(
    get,
    path = "/api/admin/auth/me",
    responses(
        (status = 200, description = "Current admin", body = ApiResponse<AdminDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(RequireAdmin(admin): RequireAdmin) -> Result<Json<ApiResponse<AdminDto>>> {
    Ok(Json(ApiResponse::success(Some(admin.into()), None, None)))
}
