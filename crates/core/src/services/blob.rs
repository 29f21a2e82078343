//! Blob storage backends.

use async_trait::async_trait;
use hospidex_common::{AppError, AppResult};
use std::path::PathBuf;

/// Blob store trait for file byte operations.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store a payload at the given path with public read access and return
    /// the public URL of the stored blob.
    async fn put(&self, path: &str, data: &[u8]) -> AppResult<String>;

    /// Delete a blob by its public URL.
    async fn delete(&self, url: &str) -> AppResult<()>;
}

/// Local filesystem blob store.
#[derive(Clone)]
pub struct LocalBlobStore {
    /// Base directory for storing blobs.
    base_path: PathBuf,
    /// Base URL under which stored blobs are reachable.
    base_url: String,
}

impl LocalBlobStore {
    /// Create a new local blob store.
    #[must_use]
    pub fn new(base_path: PathBuf, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_path, base_url }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, path: &str, data: &[u8]) -> AppResult<String> {
        let target = self.path_for(path);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Storage(format!("Failed to create directory: {e}")))?;
        }

        tokio::fs::write(&target, data)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write blob: {e}")))?;

        Ok(format!("{}/{path}", self.base_url))
    }

    async fn delete(&self, url: &str) -> AppResult<()> {
        let key = url
            .strip_prefix(&self.base_url)
            .map(|k| k.trim_start_matches('/'))
            .ok_or_else(|| AppError::Storage(format!("Blob URL outside this store: {url}")))?;

        let target = self.path_for(key);
        if target.exists() {
            tokio::fs::remove_file(&target)
                .await
                .map_err(|e| AppError::Storage(format!("Failed to delete blob: {e}")))?;
        }

        Ok(())
    }
}

/// Type alias for a shared blob store handle.
pub type BlobService = std::sync::Arc<dyn BlobStore>;
