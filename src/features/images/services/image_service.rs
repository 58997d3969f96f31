use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::images::dtos::{ImageResponseDto, SubmitImageDto};
use crate::features::images::models::Image;
use crate::features::images::repositories::ImageRepository;
use crate::modules::fetch::ImageFetcher;
use crate::modules::storage::ImageStore;
use crate::shared::types::PaginationQuery;
use crate::shared::validation::{extension_from_url, slugify};

/// Service for image submissions
pub struct ImageService {
    repository: Arc<dyn ImageRepository>,
    storage: Arc<dyn ImageStore>,
    fetcher: Arc<dyn ImageFetcher>,
}

impl ImageService {
    pub fn new(
        repository: Arc<dyn ImageRepository>,
        storage: Arc<dyn ImageStore>,
        fetcher: Arc<dyn ImageFetcher>,
    ) -> Self {
        Self {
            repository,
            storage,
            fetcher,
        }
    }

    /// Build an image record from validated input.
    ///
    /// Downloads the remote bytes, attaches them to storage under a
    /// slug-derived file name, and writes the record through the
    /// repository when `commit` is true. The built record is returned
    /// whether or not it was persisted.
    ///
    /// # Arguments
    /// * `dto` - The validated submission (title, url, description)
    /// * `commit` - Whether to write the record to the database
    pub async fn create(&self, dto: SubmitImageDto, commit: bool) -> Result<ImageResponseDto> {
        // Same extension rule as the input validation; a dot-less URL is
        // rejected here too rather than treated as a fault.
        let extension = extension_from_url(&dto.url).ok_or_else(|| {
            AppError::Validation(
                "url: The given url does not match valid image extensions.".to_string(),
            )
        })?;

        let name = slugify(&dto.title);
        let file_name = format!("{}.{}", name, extension);

        let bytes = self.fetcher.fetch(&dto.url).await?;
        let file_size = bytes.len() as i64;

        let stored = self.storage.put_file(&file_name, bytes).await?;
        debug!("Image stored: key={}, size={}", stored.key, file_size);

        let now = Utc::now();
        let image = Image {
            id: Uuid::new_v4(),
            title: dto.title,
            slug: name,
            url: dto.url,
            description: dto.description,
            file_name,
            file_key: stored.key,
            file_url: stored.url,
            file_size,
            created_at: now,
            updated_at: now,
        };

        if commit {
            self.repository.save(&image).await?;
            info!(
                "Image record saved: id={}, key={}, size={}",
                image.id, image.file_key, image.file_size
            );
        }

        Ok(image.into())
    }

    /// Look up a persisted image by id
    pub async fn get(&self, id: Uuid) -> Result<ImageResponseDto> {
        let image = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

        Ok(image.into())
    }

    /// Newest-first page of persisted images, with the total count
    pub async fn list(&self, pagination: &PaginationQuery) -> Result<(Vec<ImageResponseDto>, i64)> {
        let total = self.repository.count().await?;
        let images = self
            .repository
            .list(pagination.limit(), pagination.offset())
            .await?;

        Ok((images.into_iter().map(Into::into).collect(), total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        InMemoryImageRepository, InMemoryImageStore, StaticImageFetcher,
    };
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;

    fn service_with(
        bytes: &[u8],
    ) -> (
        ImageService,
        Arc<InMemoryImageRepository>,
        Arc<InMemoryImageStore>,
    ) {
        let repository = Arc::new(InMemoryImageRepository::default());
        let storage = Arc::new(InMemoryImageStore::default());
        let fetcher = Arc::new(StaticImageFetcher {
            bytes: bytes.to_vec(),
        });
        let service = ImageService::new(repository.clone(), storage.clone(), fetcher);
        (service, repository, storage)
    }

    fn submit_dto(title: &str, url: &str) -> SubmitImageDto {
        SubmitImageDto {
            title: title.to_string(),
            url: url.to_string(),
            description: Some(Sentence(3..8).fake()),
        }
    }

    #[tokio::test]
    async fn test_create_without_commit_attaches_file_but_does_not_persist() {
        let (service, repository, storage) = service_with(b"image-bytes");

        let result = service
            .create(submit_dto("My Photo!!", "http://host/pic.jpg"), false)
            .await
            .unwrap();

        // The file was attached...
        let files = storage.files.lock().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "images/my-photo.jpg");
        assert_eq!(files[0].1, b"image-bytes");
        drop(files);

        // ...but no row was written.
        assert!(!repository.exists(result.id).await.unwrap());
        assert_eq!(repository.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_with_commit_persists_matching_row() {
        let (service, repository, _storage) = service_with(b"image-bytes");
        let dto = submit_dto("Harbour at dusk", "http://host/harbour.png");
        let (title, url, description) = (dto.title.clone(), dto.url.clone(), dto.description.clone());

        let result = service.create(dto, true).await.unwrap();

        let saved = repository.find_by_id(result.id).await.unwrap().unwrap();
        assert_eq!(saved.title, title);
        assert_eq!(saved.url, url);
        assert_eq!(saved.description, description);
        assert_eq!(saved.file_size, b"image-bytes".len() as i64);
        assert!(!saved.file_key.is_empty());
    }

    #[tokio::test]
    async fn test_create_derives_slug_and_lowercased_extension() {
        let (service, _repository, _storage) = service_with(b"x");

        let result = service
            .create(submit_dto("My Photo!!", "http://host/pic.JPG"), true)
            .await
            .unwrap();

        assert_eq!(result.slug, "my-photo");
        assert_eq!(result.file_name, "my-photo.jpg");
    }

    #[tokio::test]
    async fn test_create_rejects_dotless_url_before_fetching() {
        let (service, _repository, storage) = service_with(b"x");

        let result = service
            .create(submit_dto("A title", "http://imagehost/photo"), true)
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(storage.files.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_image_is_not_found() {
        let (service, _repository, _storage) = service_with(b"x");

        let result = service.get(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_pages_and_counts() {
        let (service, _repository, _storage) = service_with(b"x");
        for i in 0..3 {
            service
                .create(
                    submit_dto(&format!("Photo {}", i), "http://host/pic.jpg"),
                    true,
                )
                .await
                .unwrap();
        }

        let pagination = PaginationQuery {
            page: 1,
            page_size: 2,
        };
        let (images, total) = service.list(&pagination).await.unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(total, 3);
    }
}
