use std::sync::Arc;

use bytes::Bytes;
use exhibit_kiosk::intake::{IntakeError, UploadIntake};
use exhibit_kiosk::store::{AssetStore, LocalStore};

fn test_intake(dir: &tempfile::TempDir) -> (Arc<dyn AssetStore>, UploadIntake) {
    let store: Arc<dyn AssetStore> =
        Arc::new(LocalStore::new(dir.path()).expect("Failed to create test store"));
    let intake = UploadIntake::new(
        Arc::clone(&store),
        vec!["mp4", "mov", "avi", "mkv"]
            .into_iter()
            .map(String::from)
            .collect(),
    );
    (store, intake)
}

#[tokio::test]
async fn test_accept_and_retrieve_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let (_store, intake) = test_intake(&dir);

    let data = Bytes::from_static(b"\x00\x00\x00\x18ftypmp42 fake video bytes");
    let asset = intake.accept("clip.mp4", data.clone()).await.unwrap();

    assert_eq!(asset.stored_filename, "clip.mp4");
    assert_eq!(asset.extension, "mp4");
    assert_eq!(asset.retrieval_path, "/uploads/clip.mp4");

    let retrieved = intake.retrieve("clip.mp4").await.unwrap();
    assert_eq!(retrieved, data);
}

#[tokio::test]
async fn test_accept_uppercase_extension() {
    let dir = tempfile::tempdir().unwrap();
    let (_store, intake) = test_intake(&dir);

    let asset = intake
        .accept("Holiday.MOV", Bytes::from("data"))
        .await
        .unwrap();
    assert_eq!(asset.extension, "mov");
    assert_eq!(asset.stored_filename, "Holiday.MOV");
}

#[tokio::test]
async fn test_accept_rejects_disallowed_extension() {
    let dir = tempfile::tempdir().unwrap();
    let (store, intake) = test_intake(&dir);

    let result = intake.accept("clip.txt", Bytes::from("data")).await;
    assert!(matches!(result, Err(IntakeError::InvalidFileType(_))));

    // Nothing was written
    assert!(!store.exists("clip.txt").await.unwrap());
}

#[tokio::test]
async fn test_accept_rejects_missing_extension() {
    let dir = tempfile::tempdir().unwrap();
    let (store, intake) = test_intake(&dir);

    let result = intake.accept("noext", Bytes::from("data")).await;
    assert!(matches!(result, Err(IntakeError::InvalidFileType(_))));
    assert!(!store.exists("noext").await.unwrap());
}

#[tokio::test]
async fn test_accept_rejects_empty_filename() {
    let dir = tempfile::tempdir().unwrap();
    let (_store, intake) = test_intake(&dir);

    let result = intake.accept("", Bytes::from("data")).await;
    assert!(matches!(result, Err(IntakeError::InvalidFileType(_))));
}

#[tokio::test]
async fn test_accept_rejects_trailing_dot() {
    let dir = tempfile::tempdir().unwrap();
    let (_store, intake) = test_intake(&dir);

    let result = intake.accept("clip.", Bytes::from("data")).await;
    assert!(matches!(result, Err(IntakeError::InvalidFileType(_))));
}

#[tokio::test]
async fn test_accept_rejects_path_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let (_store, intake) = test_intake(&dir);

    for name in ["../evil.mp4", "a/b.mp4", "..\\evil.mp4", ".."] {
        let result = intake.accept(name, Bytes::from("data")).await;
        assert!(
            matches!(result, Err(IntakeError::UnsafeFilename(_))),
            "{name} should be rejected"
        );
    }

    // Nothing escaped the storage root
    assert!(!dir.path().parent().unwrap().join("evil.mp4").exists());
}

#[tokio::test]
async fn test_accept_same_name_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let (_store, intake) = test_intake(&dir);

    intake.accept("clip.mp4", Bytes::from("first")).await.unwrap();
    intake
        .accept("clip.mp4", Bytes::from("second"))
        .await
        .unwrap();

    let data = intake.retrieve("clip.mp4").await.unwrap();
    assert_eq!(data, Bytes::from("second"));
}

#[tokio::test]
async fn test_retrieve_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (_store, intake) = test_intake(&dir);

    let result = intake.retrieve("never_uploaded.mp4").await;
    assert!(matches!(result, Err(IntakeError::NotFound(_))));
}

#[tokio::test]
async fn test_retrieve_screens_traversal_filenames() {
    let dir = tempfile::tempdir().unwrap();
    let (_store, intake) = test_intake(&dir);

    let result = intake.retrieve("../secret.mp4").await;
    assert!(matches!(result, Err(IntakeError::UnsafeFilename(_))));
}

#[tokio::test]
async fn test_custom_allow_list() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn AssetStore> = Arc::new(LocalStore::new(dir.path()).unwrap());
    let intake = UploadIntake::new(store, vec!["webm".to_string()]);

    assert!(intake.accept("clip.webm", Bytes::from("x")).await.is_ok());
    assert!(matches!(
        intake.accept("clip.mp4", Bytes::from("x")).await,
        Err(IntakeError::InvalidFileType(_))
    ));
}
