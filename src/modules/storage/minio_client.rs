//! MinIO/S3-compatible storage client
//!
//! Stores downloaded images in MinIO or any S3-compatible storage service.
//!
//! Uses rust-s3 crate for lightweight S3 operations.

use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use tracing::{debug, info, warn};

use crate::core::config::MinIOConfig;
use crate::core::error::{AppError, Result};
use crate::modules::storage::{ImageStore, StoredFile};

/// MinIO/S3-compatible storage client
pub struct MinIOClient {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    endpoint: String,
    public_endpoint: String,
    images_prefix: String,
}

impl MinIOClient {
    /// Create a new MinIO client from configuration.
    /// The bucket is created on first use if it does not exist yet.
    pub async fn new(config: MinIOConfig) -> Result<Self> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create MinIO credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create MinIO bucket: {}", e)))?;

        // Use path-style URLs for MinIO (http://endpoint/bucket instead of http://bucket.endpoint)
        bucket.set_path_style();

        let client = Self {
            bucket,
            region,
            credentials,
            endpoint: config.endpoint,
            public_endpoint: config.public_endpoint,
            images_prefix: config.images_prefix,
        };

        client.ensure_bucket_exists().await?;

        info!(
            "MinIO client initialized for endpoint: {}, bucket: {}, images_prefix: {}",
            client.endpoint,
            client.bucket.name(),
            client.images_prefix
        );

        Ok(client)
    }

    /// Ensure the bucket exists, create if not
    pub async fn ensure_bucket_exists(&self) -> Result<()> {
        // Try to create bucket - if it already exists, MinIO will return an error
        // which we can safely ignore
        match self.create_bucket().await {
            Ok(_) => {
                info!("Bucket '{}' created successfully", self.bucket.name());
                Ok(())
            }
            Err(e) => {
                let error_str = e.to_string();
                // Bucket already exists - this is fine
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                    Ok(())
                } else {
                    // Log warning but don't fail - bucket might exist with different error
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                    Ok(())
                }
            }
        }
    }

    /// Create the bucket
    async fn create_bucket(&self) -> Result<()> {
        let bucket_config = BucketConfiguration::default();

        Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            bucket_config,
        )
        .await
        .map_err(|e| {
            AppError::Internal(format!(
                "Failed to create bucket '{}': {}",
                self.bucket.name(),
                e
            ))
        })?;

        Ok(())
    }

    /// Generate the object key for an image file name
    /// (e.g., "my-photo.jpg" -> "images/my-photo.jpg")
    pub fn generate_key(&self, file_name: &str) -> String {
        format!("{}/{}", self.images_prefix, file_name)
    }

    /// Upload image bytes to the storage under the given key
    pub async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<String> {
        self.bucket
            .put_object_with_content_type(key, &data, content_type)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to upload file '{}': {}", key, e)))?;

        debug!("Uploaded file '{}' to bucket '{}'", key, self.bucket.name());
        Ok(key.to_string())
    }

    /// Get the URL for a stored image, using the public endpoint
    pub fn get_file_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }

    /// Best-effort content type derived from the file name extension
    fn content_type_for(file_name: &str) -> &'static str {
        match file_name.rsplit('.').next() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            _ => "application/octet-stream",
        }
    }
}

#[async_trait]
impl ImageStore for MinIOClient {
    async fn put_file(&self, name: &str, bytes: Vec<u8>) -> Result<StoredFile> {
        let key = self.generate_key(name);
        let content_type = Self::content_type_for(name);

        self.upload(&key, bytes, content_type).await?;

        let url = self.get_file_url(&key);
        Ok(StoredFile { key, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for_known_extensions() {
        assert_eq!(MinIOClient::content_type_for("my-photo.jpg"), "image/jpeg");
        assert_eq!(MinIOClient::content_type_for("my-photo.jpeg"), "image/jpeg");
        assert_eq!(MinIOClient::content_type_for("diagram.png"), "image/png");
    }

    #[test]
    fn test_content_type_for_unknown_extension() {
        assert_eq!(
            MinIOClient::content_type_for("archive.bin"),
            "application/octet-stream"
        );
        assert_eq!(
            MinIOClient::content_type_for("no-extension"),
            "application/octet-stream"
        );
    }
}
