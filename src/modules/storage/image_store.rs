use async_trait::async_trait;

use crate::core::error::Result;

/// Reference to a stored object
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Object key within the backing bucket
    pub key: String,
    /// URL the stored object can be fetched from
    pub url: String,
}

/// Capability interface for attaching named bytes to object storage.
///
/// The only contract callers rely on is "store these bytes under this
/// name and hand back a reference" - which backend fulfils it is an
/// injection decision made at startup.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store `bytes` under `name` and return the object reference.
    async fn put_file(&self, name: &str, bytes: Vec<u8>) -> Result<StoredFile>;
}
