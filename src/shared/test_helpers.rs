#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::core::error::Result;
#[cfg(test)]
use crate::features::images::models::Image;
#[cfg(test)]
use crate::features::images::repositories::ImageRepository;
#[cfg(test)]
use crate::modules::fetch::ImageFetcher;
#[cfg(test)]
use crate::modules::storage::{ImageStore, StoredFile};

/// In-memory image repository for tests
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryImageRepository {
    rows: Mutex<HashMap<Uuid, Image>>,
}

#[cfg(test)]
#[async_trait]
impl ImageRepository for InMemoryImageRepository {
    async fn save(&self, image: &Image) -> Result<()> {
        self.rows.lock().unwrap().insert(image.id, image.clone());
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(self.rows.lock().unwrap().contains_key(&id))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Image>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Image>> {
        let rows = self.rows.lock().unwrap();
        let mut images: Vec<Image> = rows.values().cloned().collect();
        images.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(images
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

/// In-memory store that records every uploaded file
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryImageStore {
    pub files: Mutex<Vec<(String, Vec<u8>)>>,
}

#[cfg(test)]
#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn put_file(&self, name: &str, bytes: Vec<u8>) -> Result<StoredFile> {
        let key = format!("images/{}", name);
        self.files.lock().unwrap().push((key.clone(), bytes));
        Ok(StoredFile {
            url: format!("http://storage.test/imagemark-images/{}", key),
            key,
        })
    }
}

/// Fetcher that returns fixed bytes for any URL
#[cfg(test)]
pub struct StaticImageFetcher {
    pub bytes: Vec<u8>,
}

#[cfg(test)]
#[async_trait]
impl ImageFetcher for StaticImageFetcher {
    async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}
