use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

// 1. StorageService Contract
/// StorageService
///
/// Defines the abstract contract for the file-ingest layer. This trait allows us
/// to swap the concrete implementation—from the real local-disk writer
/// (LocalDiskStorage) in production to the in-memory Mock (MockStorageService)
/// during testing—without affecting the calling handlers.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Persists one uploaded file under a collision-resistant unique name and
    /// returns its public URL (e.g. `/uploads/user-1712345678901-abc.png`).
    ///
    /// # Arguments
    /// * `original_name`: the client-side filename, used only to derive the extension.
    /// * `bytes`: the raw file content. No content-type or size validation happens here.
    async fn store_file(&self, original_name: &str, bytes: &[u8]) -> Result<String, String>;
}

/// sanitize_extension
///
/// Derives a safe extension from a user-provided filename: the last dot-separated
/// segment, restricted to alphanumerics, falling back to "bin". This prevents
/// path traversal via crafted filenames; the rest of the stored name is
/// server-generated.
fn sanitize_extension(original_name: &str) -> String {
    let ext = original_name
        .rsplit('.')
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(10)
        .collect::<String>()
        .to_lowercase();

    if ext.is_empty() { "bin".to_string() } else { ext }
}

/// unique_filename
///
/// Collision resistance comes from the millisecond timestamp plus a random UUID
/// suffix; the original name contributes only its extension.
fn unique_filename(original_name: &str) -> String {
    format!(
        "user-{}-{}.{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        sanitize_extension(original_name)
    )
}

// 2. The Real Implementation (Local Disk)
/// LocalDiskStorage
///
/// Writes uploads to a fixed public directory (created on demand) which the
/// router serves back under `/uploads`. Ownership of the bytes ends here; the
/// database only ever stores the returned public URL.
#[derive(Clone)]
pub struct LocalDiskStorage {
    upload_dir: PathBuf,
}

impl LocalDiskStorage {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }
}

#[async_trait]
impl StorageService for LocalDiskStorage {
    async fn store_file(&self, original_name: &str, bytes: &[u8]) -> Result<String, String> {
        // The directory may not exist on first boot or after a clean deploy.
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| format!("failed to create upload dir: {}", e))?;

        let filename = unique_filename(original_name);
        let filepath = self.upload_dir.join(&filename);

        tokio::fs::write(&filepath, bytes)
            .await
            .map_err(|e| format!("failed to write upload: {}", e))?;

        Ok(format!("/uploads/{}", filename))
    }
}

// 3. The Mock Implementation (For Unit Tests)
/// MockStorageService
///
/// A mock implementation of `StorageService` used exclusively for unit and
/// integration testing. This lets us exercise the upload handler logic without
/// touching the filesystem, isolating the test boundary.
#[derive(Clone)]
pub struct MockStorageService {
    /// When true, all operations return a simulated failure.
    pub should_fail: bool,
}

impl MockStorageService {
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    pub fn new_failing() -> Self {
        Self { should_fail: true }
    }
}

impl Default for MockStorageService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageService for MockStorageService {
    async fn store_file(&self, original_name: &str, _bytes: &[u8]) -> Result<String, String> {
        if self.should_fail {
            return Err("Mock Storage Error: Simulation requested".to_string());
        }

        // Deterministic URL shape for mock assertions.
        Ok(format!(
            "/uploads/mock-{}",
            sanitize_extension(original_name)
        ))
    }
}

/// StorageState
///
/// The concrete type used to share the storage service access across the application state.
pub type StorageState = Arc<dyn StorageService>;
