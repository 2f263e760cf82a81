use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::files::dtos::{extension_for, FileResponseDto, UploadedFile};
use crate::features::files::models::File;
use crate::modules::storage::StorageClient;

const FILE_COLUMNS: &str = "id, file_key, original_filename, content_type, file_size, url, \
                            purpose, uploaded_by, is_active, created_at, updated_at";

pub struct FileService {
    pool: PgPool,
    storage: Arc<StorageClient>,
}

impl FileService {
    pub fn new(pool: PgPool, storage: Arc<StorageClient>) -> Self {
        Self { pool, storage }
    }

    /// Store the object, then record its metadata.
    ///
    /// Objects are keyed `{prefix}/{purpose}/{uuid}.{ext}` so the original
    /// filename never ends up in a public URL.
    pub async fn upload(&self, file: UploadedFile, uploaded_by: Uuid) -> Result<FileResponseDto> {
        file.check()?;

        let purpose_path = file.purpose.as_deref().unwrap_or("uploads");
        let path = format!(
            "{}/{}.{}",
            purpose_path,
            Uuid::now_v7(),
            extension_for(&file.content_type)
        );
        let file_key = self.storage.key_for(&path);
        let url = self.storage.public_url(&file_key);

        self.storage
            .upload(&file_key, &file.data, &file.content_type)
            .await?;

        let query = format!(
            r#"
            INSERT INTO files (file_key, original_filename, content_type, file_size, url, purpose, uploaded_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {FILE_COLUMNS}
            "#
        );
        let record = sqlx::query_as::<_, File>(&query)
            .bind(&file_key)
            .bind(&file.original_filename)
            .bind(&file.content_type)
            .bind(file.data.len() as i64)
            .bind(&url)
            .bind(&file.purpose)
            .bind(uploaded_by)
            .fetch_one(&self.pool)
            .await;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                // Do not leave an orphaned object behind
                if let Err(cleanup) = self.storage.delete(&file_key).await {
                    warn!("Failed to remove orphaned object {}: {}", file_key, cleanup);
                }
                tracing::error!("Failed to record uploaded file: {:?}", e);
                return Err(AppError::Database(e));
            }
        };

        info!(
            "File uploaded: id={}, key={}, size={}",
            record.id, record.file_key, record.file_size
        );

        Ok(record.into())
    }

    /// Remove an uploaded file by its public URL
    pub async fn delete_by_url(&self, url: &str) -> Result<()> {
        if self.storage.key_from_url(url).is_none() {
            return Err(AppError::BadRequest(
                "URL bukan milik penyimpanan media situs ini".to_string(),
            ));
        }

        let query = format!("SELECT {FILE_COLUMNS} FROM files WHERE url = $1 AND is_active = TRUE");
        let file = sqlx::query_as::<_, File>(&query)
            .bind(url)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("File tidak ditemukan".to_string()))?;

        self.storage.delete(&file.file_key).await?;
        debug!("Deleted object {}", file.file_key);

        sqlx::query("UPDATE files SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(file.id)
            .execute(&self.pool)
            .await?;

        info!("File deleted: id={}, key={}", file.id, file.file_key);
        Ok(())
    }
}
