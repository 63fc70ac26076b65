use std::io;

use bytes::Bytes;

use crate::domain::ArtifactName;

/// Persistent home of synthesis artifacts served back to clients.
#[async_trait::async_trait]
pub trait AudioStore: Send + Sync {
    async fn store(&self, name: &ArtifactName, data: Bytes) -> Result<u64, AudioStoreError>;

    async fn fetch(&self, name: &ArtifactName) -> Result<Vec<u8>, AudioStoreError>;

    async fn delete(&self, name: &ArtifactName) -> Result<(), AudioStoreError>;

    async fn head(&self, name: &ArtifactName) -> Result<u64, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
