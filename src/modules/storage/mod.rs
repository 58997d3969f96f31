//! Storage module for downloaded images
//!
//! Provides the `ImageStore` capability interface and a MinIO/S3-compatible
//! implementation used to persist downloaded image bytes.

mod image_store;
mod minio_client;

pub use image_store::{ImageStore, StoredFile};
pub use minio_client::MinIOClient;
