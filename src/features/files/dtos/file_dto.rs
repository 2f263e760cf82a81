use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::files::models::File;
use crate::shared::validation::IDENTIFIER_REGEX;

/// Maximum upload size (5 MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Image types accepted for upload
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

/// Multipart upload form, for Swagger UI only.
/// The handler reads the fields with axum's `Multipart` extractor.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadFileDto {
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Where the image is used, e.g. `cover_image` or `brand_logo`
    #[schema(example = "cover_image")]
    pub purpose: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileResponseDto {
    pub id: Uuid,
    pub original_filename: String,
    pub content_type: String,
    pub file_size: i64,
    /// Public URL, ready to paste into a cover image or logo field
    pub url: String,
    pub purpose: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<File> for FileResponseDto {
    fn from(file: File) -> Self {
        Self {
            id: file.id,
            original_filename: file.original_filename,
            content_type: file.content_type,
            file_size: file.file_size,
            url: file.url,
            purpose: file.purpose,
            created_at: file.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteFileByUrlDto {
    #[validate(url(message = "URL file tidak valid"))]
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteFileResponseDto {
    pub deleted: bool,
}

/// A fully read multipart upload
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub original_filename: String,
    pub content_type: String,
    pub purpose: Option<String>,
}

impl UploadedFile {
    /// Size, type and purpose checks, run before anything reaches storage
    pub fn check(&self) -> Result<(), AppError> {
        if self.data.is_empty() {
            return Err(AppError::Validation("File kosong".to_string()));
        }

        if self.data.len() > MAX_FILE_SIZE {
            return Err(AppError::Validation(format!(
                "Ukuran file maksimal {} MB",
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }

        if !is_mime_type_allowed(&self.content_type) {
            return Err(AppError::Validation(format!(
                "Tipe file '{}' tidak didukung. Gunakan: {}",
                self.content_type,
                ALLOWED_MIME_TYPES.join(", ")
            )));
        }

        if let Some(purpose) = &self.purpose {
            if !IDENTIFIER_REGEX.is_match(purpose) {
                return Err(AppError::Validation(
                    "Purpose hanya boleh berisi huruf kecil, angka dan garis bawah".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Lowercased type without parameters: `IMAGE/PNG; charset=binary` -> `image/png`
pub fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

pub fn is_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&normalize_mime_type(content_type).as_str())
}

pub fn extension_for(content_type: &str) -> &'static str {
    match normalize_mime_type(content_type).as_str() {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        _ => "bin",
    }
}
