use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::images::models::Image;

/// Persistence interface for image records.
///
/// The service builds records in memory and only touches the repository
/// when a commit is requested, so implementations never see a record
/// without its file reference.
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Insert a fully built record
    async fn save(&self, image: &Image) -> Result<()>;

    /// Whether a record with this id has been persisted
    async fn exists(&self, id: Uuid) -> Result<bool>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Image>>;

    /// Newest-first page of records
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Image>>;

    async fn count(&self) -> Result<i64>;
}

/// Postgres-backed image repository
pub struct PgImageRepository {
    pool: PgPool,
}

impl PgImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    async fn save(&self, image: &Image) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO images (
                id, title, slug, url, description,
                file_name, file_key, file_url, file_size,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(image.id)
        .bind(&image.title)
        .bind(&image.slug)
        .bind(&image.url)
        .bind(&image.description)
        .bind(&image.file_name)
        .bind(&image.file_key)
        .bind(&image.file_url)
        .bind(image.file_size)
        .bind(image.created_at)
        .bind(image.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert image: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM images WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Image>> {
        let image = sqlx::query_as::<_, Image>(
            r#"
            SELECT id, title, slug, url, description,
                   file_name, file_key, file_url, file_size,
                   created_at, updated_at
            FROM images
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(image)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Image>> {
        let images = sqlx::query_as::<_, Image>(
            r#"
            SELECT id, title, slug, url, description,
                   file_name, file_key, file_url, file_size,
                   created_at, updated_at
            FROM images
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }

    async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM images")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.0)
    }
}
