use efarming_cms::{
    AppConfig, AppState, MockStorageService, auth, create_router, db,
    models::{LoginResponse, User, UserData},
    repository::{Repository, RepositoryState, SqliteRepository},
    storage::StorageState,
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

async fn spawn_app() -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pool = db::init_database(&dir.path().join("test.db"))
        .await
        .expect("Failed to open SQLite database in tests");

    let repo = Arc::new(SqliteRepository::new(pool));
    let state = AppState {
        repo: repo.clone() as RepositoryState,
        storage: Arc::new(MockStorageService::new()) as StorageState,
        config: AppConfig::default(),
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

/// Seeds an account with a real Argon2id hash so the login route can verify it.
async fn seed_user(repo: &SqliteRepository, role: &str, status: &str, password: &str) -> User {
    let hash = auth::hash_password(password).expect("hashing should succeed");
    repo.create_user(
        UserData {
            name: format!("{} user", role),
            email: format!("{}-{}@test.com", role.to_lowercase(), Uuid::new_v4()),
            role: role.to_string(),
            image: None,
            status: status.to_string(),
        },
        hash,
    )
    .await
    .expect("Failed to seed user")
}

#[tokio::test]
async fn test_login_issues_usable_token() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let user = seed_user(&app.repo, "EDITOR", "ACTIVE", "hunter2-but-longer").await;

    let response = client
        .post(&format!("{}/api/auth/login", app.address))
        .json(&serde_json::json!({
            "email": user.email,
            "password": "hunter2-but-longer"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let login: LoginResponse = response.json().await.unwrap();
    assert_eq!(login.user.id, user.id);
    assert_eq!(login.user.role, "EDITOR");
    assert!(!login.token.is_empty());

    // The issued token must open the gate on /api/me.
    let response = client
        .get(&format!("{}/api/me", app.address))
        .bearer_auth(&login.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let me: serde_json::Value = response.json().await.unwrap();
    assert_eq!(me["email"], user.email);
    // The password hash must never appear in any response body.
    assert!(me.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let user = seed_user(&app.repo, "EDITOR", "ACTIVE", "the-real-password").await;

    // Wrong password.
    let response = client
        .post(&format!("{}/api/auth/login", app.address))
        .json(&serde_json::json!({ "email": user.email, "password": "not-it" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    // Unknown email.
    let response = client
        .post(&format!("{}/api/auth/login", app.address))
        .json(&serde_json::json!({ "email": "ghost@test.com", "password": "anything" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_inactive_account_cannot_login() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let user = seed_user(&app.repo, "EDITOR", "INACTIVE", "still-remembers-it").await;

    let response = client
        .post(&format!("{}/api/auth/login", app.address))
        .json(&serde_json::json!({ "email": user.email, "password": "still-remembers-it" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_mutations_require_session() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    // No session header at all.
    let response = client
        .post(&format!("{}/api/partners", app.address))
        .json(&serde_json::json!({ "name": "Sneaky Partner" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string());

    // The gate fires before validation and before any write.
    assert!(app.repo.list_partners().await.unwrap().is_empty());

    // A garbage bearer token reads the same.
    let response = client
        .delete(&format!("{}/api/posts/{}", app.address, Uuid::new_v4()))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_team_member_reads_are_gated() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api/team-members", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_public_reads_need_no_session() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for path in ["/api/posts", "/api/projects", "/api/partners"] {
        let response = client
            .get(&format!("{}{}", app.address, path))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200, "GET {} should be public", path);
    }
}

#[tokio::test]
async fn test_user_routes_demand_admin() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let editor = seed_user(&app.repo, "EDITOR", "ACTIVE", "editor-password").await;
    let admin = seed_user(&app.repo, "ADMIN", "ACTIVE", "admin-password").await;

    // An EDITOR session is a valid session, but not enough here.
    let response = client
        .get(&format!("{}/api/users", app.address))
        .header("x-user-id", editor.id.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    let response = client
        .post(&format!("{}/api/users", app.address))
        .header("x-user-id", editor.id.to_string())
        .json(&serde_json::json!({
            "name": "New Hire",
            "email": "hire@test.com",
            "password": "longenough",
            "role": "EDITOR"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    // ADMIN passes both gates.
    let response = client
        .get(&format!("{}/api/users", app.address))
        .header("x-user-id", admin.id.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let users: Vec<serde_json::Value> = response.json().await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_admin_user_lifecycle() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let admin = seed_user(&app.repo, "ADMIN", "ACTIVE", "admin-password").await;

    // Create an account; verify the new credentials work.
    let response = client
        .post(&format!("{}/api/users", app.address))
        .header("x-user-id", admin.id.to_string())
        .json(&serde_json::json!({
            "name": "New Editor",
            "email": "new.editor@test.com",
            "password": "first-password",
            "role": "EDITOR"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let created: serde_json::Value = response.json().await.unwrap();
    assert_eq!(created["status"], "ACTIVE");
    assert!(created.get("passwordHash").is_none());
    let id = created["id"].as_str().unwrap().to_string();

    let response = client
        .post(&format!("{}/api/auth/login", app.address))
        .json(&serde_json::json!({ "email": "new.editor@test.com", "password": "first-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // PUT without a password must not disturb the stored hash.
    let response = client
        .put(&format!("{}/api/users/{}", app.address, id))
        .header("x-user-id", admin.id.to_string())
        .json(&serde_json::json!({ "name": "Renamed Editor" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client
        .post(&format!("{}/api/auth/login", app.address))
        .json(&serde_json::json!({ "email": "new.editor@test.com", "password": "first-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200, "old password should still work");

    // PUT with a password rehashes.
    let response = client
        .put(&format!("{}/api/users/{}", app.address, id))
        .header("x-user-id", admin.id.to_string())
        .json(&serde_json::json!({ "password": "second-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client
        .post(&format!("{}/api/auth/login", app.address))
        .json(&serde_json::json!({ "email": "new.editor@test.com", "password": "first-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401, "old password should be dead");

    let response = client
        .post(&format!("{}/api/auth/login", app.address))
        .json(&serde_json::json!({ "email": "new.editor@test.com", "password": "second-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // Soft delete: the account vanishes and its sessions stop resolving.
    let response = client
        .delete(&format!("{}/api/users/{}", app.address, id))
        .header("x-user-id", admin.id.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client
        .post(&format!("{}/api/auth/login", app.address))
        .json(&serde_json::json!({ "email": "new.editor@test.com", "password": "second-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    let response = client
        .get(&format!("{}/api/me", app.address))
        .header("x-user-id", id)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401, "deleted user must not resolve via bypass");
}

#[tokio::test]
async fn test_soft_deleted_user_token_stops_working() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let user = seed_user(&app.repo, "EDITOR", "ACTIVE", "soon-to-be-gone").await;

    let login: LoginResponse = client
        .post(&format!("{}/api/auth/login", app.address))
        .json(&serde_json::json!({ "email": user.email, "password": "soon-to-be-gone" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Token works now.
    let response = client
        .get(&format!("{}/api/me", app.address))
        .bearer_auth(&login.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // Soft-delete behind the token's back.
    assert!(app.repo.soft_delete_user(user.id).await.unwrap());

    // The still-valid JWT must fail the final DB check.
    let response = client
        .get(&format!("{}/api/me", app.address))
        .bearer_auth(&login.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}
