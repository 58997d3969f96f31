use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::images::dtos::ImageResponseDto;

/// Database model for a submitted image.
///
/// The record is built in memory before any row write happens; `file_key`
/// is always populated by the time the record reaches the repository.
#[derive(Debug, Clone, FromRow)]
pub struct Image {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    /// Source URL the image was downloaded from
    pub url: String,
    pub description: Option<String>,
    /// Derived file name ({slug}.{extension})
    pub file_name: String,
    /// Object-storage key of the downloaded bytes
    pub file_key: String,
    /// URL the stored image is served from
    pub file_url: String,
    pub file_size: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Image> for ImageResponseDto {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            title: image.title,
            slug: image.slug,
            url: image.url,
            description: image.description,
            file_name: image.file_name,
            file_url: image.file_url,
            file_size: image.file_size,
            created_at: image.created_at,
        }
    }
}
