use efarming_cms::{
    AppConfig, AppState, create_router, db,
    models::UserData,
    repository::{Repository, RepositoryState, SqliteRepository},
    storage::{LocalDiskStorage, MockStorageService, StorageState},
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub repo: Arc<SqliteRepository>,
    _dir: TempDir,
}

/// Spawns the app with either real disk-backed storage (rooted in the temp dir,
/// so `/uploads` serves what the handler writes) or the failing mock.
async fn spawn_app(failing_storage: bool) -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let upload_dir = dir.path().join("uploads");

    let pool = db::init_database(&dir.path().join("test.db"))
        .await
        .expect("Failed to open SQLite database in tests");
    let repo = Arc::new(SqliteRepository::new(pool));

    let storage: StorageState = if failing_storage {
        Arc::new(MockStorageService::new_failing())
    } else {
        Arc::new(LocalDiskStorage::new(&upload_dir))
    };

    let config = AppConfig {
        upload_dir: upload_dir.to_string_lossy().to_string(),
        ..AppConfig::default()
    };

    let state = AppState {
        repo: repo.clone() as RepositoryState,
        storage,
        config,
    };
    let router = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp {
        address,
        repo,
        _dir: dir,
    }
}

async fn seed_editor(repo: &SqliteRepository) -> Uuid {
    repo.create_user(
        UserData {
            name: "Uploader".to_string(),
            email: format!("up-{}@test.com", Uuid::new_v4()),
            role: "EDITOR".to_string(),
            image: None,
            status: "ACTIVE".to_string(),
        },
        "hash".to_string(),
    )
    .await
    .expect("Failed to seed user")
    .id
}

fn file_part() -> reqwest::multipart::Form {
    reqwest::multipart::Form::new().part(
        "file",
        reqwest::multipart::Part::bytes(b"fake png bytes".to_vec()).file_name("logo.png"),
    )
}

#[tokio::test]
async fn test_upload_requires_session() {
    let app = spawn_app(false).await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/upload", app.address))
        .multipart(file_part())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_upload_stores_and_serves_file() {
    let app = spawn_app(false).await;
    let client = reqwest::Client::new();
    let user_id = seed_editor(&app.repo).await;

    let response = client
        .post(&format!("{}/api/upload", app.address))
        .header("x-user-id", user_id.to_string())
        .multipart(file_part())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/user-"));
    assert!(url.ends_with(".png"));

    // The public URL must round-trip through the static file route.
    let response = client
        .get(&format!("{}{}", app.address, url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let served = response.bytes().await.unwrap();
    assert_eq!(&served[..], b"fake png bytes");
}

#[tokio::test]
async fn test_upload_without_file_field_is_rejected() {
    let app = spawn_app(false).await;
    let client = reqwest::Client::new();
    let user_id = seed_editor(&app.repo).await;

    // A multipart body whose only field is not named "file".
    let form = reqwest::multipart::Form::new().text("avatar", "not-a-file");
    let response = client
        .post(&format!("{}/api/upload", app.address))
        .header("x-user-id", user_id.to_string())
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn test_upload_storage_failure_surfaces_generic_500() {
    let app = spawn_app(true).await;
    let client = reqwest::Client::new();
    let user_id = seed_editor(&app.repo).await;

    let response = client
        .post(&format!("{}/api/upload", app.address))
        .header("x-user-id", user_id.to_string())
        .multipart(file_part())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    // Internal details stay in the logs, not the response.
    assert_eq!(body["error"], "Internal server error");
}
