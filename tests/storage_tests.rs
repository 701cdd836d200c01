use efarming_cms::storage::{LocalDiskStorage, MockStorageService, StorageService};
use tempfile::TempDir;

#[tokio::test]
async fn test_local_disk_storage_writes_and_returns_public_url() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = LocalDiskStorage::new(dir.path());

    let url = storage
        .store_file("photo.JPG", b"fake image bytes")
        .await
        .expect("store should succeed");

    assert!(url.starts_with("/uploads/user-"));
    assert!(url.ends_with(".jpg"), "extension should be lowercased: {}", url);

    // The returned URL maps to a real file in the upload directory.
    let filename = url.strip_prefix("/uploads/").unwrap();
    let written = tokio::fs::read(dir.path().join(filename))
        .await
        .expect("file should exist on disk");
    assert_eq!(written, b"fake image bytes");
}

#[tokio::test]
async fn test_local_disk_storage_names_never_collide() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = LocalDiskStorage::new(dir.path());

    let a = storage.store_file("same.png", b"a").await.unwrap();
    let b = storage.store_file("same.png", b"b").await.unwrap();
    assert_ne!(a, b);
}

#[tokio::test]
async fn test_local_disk_storage_defuses_hostile_filenames() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = LocalDiskStorage::new(dir.path());

    // Only alphanumerics survive into the stored extension, so a traversal
    // attempt cannot steer the write path.
    let url = storage.store_file("../../etc/passwd.", b"x").await.unwrap();
    assert!(!url.contains(".."));
    assert!(url.ends_with(".bin"));

    // The file landed inside the upload dir, nowhere else.
    let filename = url.strip_prefix("/uploads/").unwrap();
    assert!(!filename.contains('/'));
    assert!(dir.path().join(filename).exists());
}

#[tokio::test]
async fn test_mock_storage_modes() {
    let ok = MockStorageService::new();
    let url = ok.store_file("a.png", b"x").await.expect("mock should succeed");
    assert!(url.starts_with("/uploads/"));

    let failing = MockStorageService::new_failing();
    assert!(failing.store_file("a.png", b"x").await.is_err());
}
