use bytes::Bytes;

use bhasha::application::ports::{AudioStore, AudioStoreError};
use bhasha::domain::{ArtifactFormat, ArtifactName, AudioId};
use bhasha::infrastructure::storage::LocalAudioStore;

fn create_test_store() -> (tempfile::TempDir, LocalAudioStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalAudioStore::new(dir.path().join("audio")).unwrap();
    (dir, store)
}

fn artifact() -> ArtifactName {
    ArtifactName::new(AudioId::new(), ArtifactFormat::Mp3)
}

#[tokio::test]
async fn given_artifact_when_storing_then_returns_byte_count() {
    let (_dir, store) = create_test_store();
    let size = store
        .store(&artifact(), Bytes::from_static(b"ID3 mp3 data"))
        .await
        .unwrap();
    assert_eq!(size, 12);
}

#[tokio::test]
async fn given_stored_artifact_when_fetching_then_bytes_match_original() {
    let (_dir, store) = create_test_store();
    let name = artifact();
    store
        .store(&name, Bytes::from_static(b"content"))
        .await
        .unwrap();

    assert_eq!(store.fetch(&name).await.unwrap(), b"content");
    assert_eq!(store.head(&name).await.unwrap(), 7);
}

#[tokio::test]
async fn given_stored_artifact_when_storing_then_file_lands_under_uuid_name() {
    let (dir, store) = create_test_store();
    let name = artifact();
    store.store(&name, Bytes::from_static(b"x")).await.unwrap();

    assert!(dir.path().join("audio").join(name.file_name()).is_file());
}

#[tokio::test]
async fn given_missing_artifact_when_fetching_then_returns_not_found() {
    let (_dir, store) = create_test_store();
    let result = store.fetch(&artifact()).await;
    assert!(matches!(result, Err(AudioStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_stored_artifact_when_deleting_then_fetch_returns_not_found() {
    let (_dir, store) = create_test_store();
    let name = artifact();
    store.store(&name, Bytes::from_static(b"data")).await.unwrap();

    store.delete(&name).await.unwrap();

    assert!(matches!(
        store.fetch(&name).await,
        Err(AudioStoreError::NotFound(_))
    ));
}
