use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::files::dtos::{
    normalize_mime_type, DeleteFileByUrlDto, DeleteFileResponseDto, FileResponseDto, UploadFileDto,
    UploadedFile,
};
use crate::features::files::services::FileService;
use crate::shared::types::ApiResponse;

/// Upload an image
///
/// Accepts multipart/form-data with:
/// - `file`: the image (required)
/// - `purpose`: where it is used, e.g. `cover_image` (optional)
#[utoipa::path(
    post,
    path = "/api/admin/files/upload",
    tag = "files",
    request_body(
        content = UploadFileDto,
        content_type = "multipart/form-data",
    ),
    responses(
        (status = 201, description = "File uploaded", body = ApiResponse<FileResponseDto>),
        (status = 400, description = "Missing file, unsupported type or too large"),
        (status = 401, description = "Authentication required"),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_file(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<FileService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<FileResponseDto>>)> {
    let mut upload: Option<UploadedFile> = None;
    let mut purpose: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Gagal membaca data upload: {}", e))
    })? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "file" => {
                let content_type =
                    normalize_mime_type(field.content_type().unwrap_or("application/octet-stream"));
                let original_filename = field.file_name().unwrap_or("unnamed").to_string();

                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Gagal membaca file: {}", e))
                })?;

                upload = Some(UploadedFile {
                    data: data.to_vec(),
                    original_filename,
                    content_type,
                    purpose: None,
                });
            }
            "purpose" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Gagal membaca purpose: {}", e))
                })?;
                let text = text.trim();
                if !text.is_empty() {
                    purpose = Some(text.to_string());
                }
            }
            _ => debug!("Ignoring unknown upload field: {}", field_name),
        }
    }

    let mut upload =
        upload.ok_or_else(|| AppError::Validation("File wajib diunggah".to_string()))?;
    upload.purpose = purpose;

    let file = service.upload(upload, admin.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(file), None, None)),
    ))
}

/// Delete an uploaded image by its URL
#[utoipa::path(
    delete,
    path = "/api/admin/files",
    tag = "files",
    request_body = DeleteFileByUrlDto,
    responses(
        (status = 200, description = "File deleted", body = ApiResponse<DeleteFileResponseDto>),
        (status = 400, description = "Invalid URL"),
        (status = 404, description = "File not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_file_by_url(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<FileService>>,
    AppJson(dto): AppJson<DeleteFileByUrlDto>,
) -> Result<Json<ApiResponse<DeleteFileResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.delete_by_url(&dto.url).await?;

    Ok(Json(ApiResponse::success(
        Some(DeleteFileResponseDto { deleted: true }),
        Some("File dihapus".to_string()),
        None,
    )))
}
