use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::ArtifactName;

/// Artifact store rooted at a local directory.
pub struct LocalAudioStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalAudioStore {
    pub fn new(base_path: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path).map_err(AudioStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

fn store_path(name: &ArtifactName) -> StorePath {
    StorePath::from(name.file_name())
}

fn not_found_or(
    name: &ArtifactName,
    e: object_store::Error,
    other: fn(String) -> AudioStoreError,
) -> AudioStoreError {
    match e {
        object_store::Error::NotFound { .. } => AudioStoreError::NotFound(name.file_name()),
        e => other(e.to_string()),
    }
}

#[async_trait::async_trait]
impl AudioStore for LocalAudioStore {
    async fn store(&self, name: &ArtifactName, data: Bytes) -> Result<u64, AudioStoreError> {
        let size = data.len() as u64;
        self.inner
            .put(&store_path(name), PutPayload::from(data))
            .await
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(artifact = %name, bytes = size, "Artifact stored");
        Ok(size)
    }

    async fn fetch(&self, name: &ArtifactName) -> Result<Vec<u8>, AudioStoreError> {
        let result = self
            .inner
            .get(&store_path(name))
            .await
            .map_err(|e| not_found_or(name, e, AudioStoreError::DownloadFailed))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| AudioStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, name: &ArtifactName) -> Result<(), AudioStoreError> {
        self.inner
            .delete(&store_path(name))
            .await
            .map_err(|e| not_found_or(name, e, AudioStoreError::DeleteFailed))
    }

    async fn head(&self, name: &ArtifactName) -> Result<u64, AudioStoreError> {
        let meta = self
            .inner
            .head(&store_path(name))
            .await
            .map_err(|e| not_found_or(name, e, AudioStoreError::DownloadFailed))?;
        Ok(meta.size as u64)
    }
}
