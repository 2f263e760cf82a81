//! S3-compatible object storage for admin media uploads

mod s3_client;

pub use s3_client::StorageClient;
