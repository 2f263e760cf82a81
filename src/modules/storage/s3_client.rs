//! S3-compatible storage client (MinIO in development).
//!
//! Every object is written under the configured key prefix and served from
//! `{public_endpoint}/{bucket}/{key}`, so the bucket (or the prefix) must allow
//! anonymous reads for images to show up on the public pages.

use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use tracing::{debug, info, warn};

use crate::core::config::StorageConfig;
use crate::core::error::AppError;

pub struct StorageClient {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    public_endpoint: String,
    prefix: String,
}

impl StorageClient {
    /// Build a client from configuration. Does not touch the network.
    pub fn new(config: &StorageConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create storage credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create storage bucket: {}", e)))?;

        // http://endpoint/bucket instead of http://bucket.endpoint
        bucket.set_path_style();

        Ok(Self {
            bucket,
            region,
            credentials,
            public_endpoint: config.public_endpoint.trim_end_matches('/').to_string(),
            prefix: config.prefix.trim_matches('/').to_string(),
        })
    }

    /// Create the bucket if it is missing. Failures are logged, never fatal.
    pub async fn ensure_bucket(&self) {
        let result = Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            BucketConfiguration::default(),
        )
        .await;

        match result {
            Ok(_) => info!("Storage bucket '{}' created", self.bucket.name()),
            Err(e) => {
                let message = e.to_string();
                if message.contains("BucketAlreadyOwnedByYou")
                    || message.contains("BucketAlreadyExists")
                {
                    debug!("Storage bucket '{}' already exists", self.bucket.name());
                } else {
                    warn!(
                        "Could not create storage bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                }
            }
        }
    }

    /// Object key for a path inside the configured prefix
    pub fn key_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.prefix.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.prefix, path)
        }
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }

    /// Reverse of [`StorageClient::public_url`]; `None` for foreign URLs
    pub fn key_from_url(&self, url: &str) -> Option<String> {
        let base = format!("{}/{}/", self.public_endpoint, self.bucket.name());
        url.strip_prefix(&base)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }

    pub async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), AppError> {
        self.bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to upload file '{}': {}", key, e))
            })?;

        debug!("Uploaded '{}' to bucket '{}'", key, self.bucket.name());
        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.bucket.delete_object(key).await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to delete file '{}': {}", key, e))
        })?;

        debug!("Deleted '{}' from bucket '{}'", key, self.bucket.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> StorageConfig {
        StorageConfig {
            endpoint: "http://minio:9000".to_string(),
            public_endpoint: "https://cdn.temujanji.id/".to_string(),
            access_key: "minioadmin".to_string(),
            secret_key: "minioadmin".to_string(),
            bucket: "temujanji-media".to_string(),
            region: "us-east-1".to_string(),
            prefix: "/public/".to_string(),
        }
    }

    #[test]
    fn test_key_for_applies_prefix() {
        let client = StorageClient::new(&test_config()).unwrap();
        assert_eq!(client.key_for("blog/a.png"), "public/blog/a.png");
        assert_eq!(client.key_for("/blog/a.png"), "public/blog/a.png");
    }

    #[test]
    fn test_key_for_without_prefix() {
        let config = StorageConfig {
            prefix: String::new(),
            ..test_config()
        };
        let client = StorageClient::new(&config).unwrap();
        assert_eq!(client.key_for("a.png"), "a.png");
    }

    #[test]
    fn test_public_url_round_trips_to_key() {
        let client = StorageClient::new(&test_config()).unwrap();
        let url = client.public_url("public/blog/a.png");
        assert_eq!(url, "https://cdn.temujanji.id/temujanji-media/public/blog/a.png");
        assert_eq!(
            client.key_from_url(&url).as_deref(),
            Some("public/blog/a.png")
        );
    }

    #[test]
    fn test_key_from_foreign_url_is_none() {
        let client = StorageClient::new(&test_config()).unwrap();
        assert!(client
            .key_from_url("https://example.com/temujanji-media/a.png")
            .is_none());
        assert!(client
            .key_from_url("https://cdn.temujanji.id/temujanji-media/")
            .is_none());
    }
}
