use axum::{Router, extract::FromRef, http::HeaderName};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod storage;
pub mod validators;

// Module for routing segregation (Public, Content, Admin).
pub mod routes;
use routes::{admin, content, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry point (main.rs).
pub use config::AppConfig;
pub use repository::{RepositoryState, SqliteRepository};
pub use storage::{LocalDiskStorage, MockStorageService, StorageState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the application.
/// It aggregates all API paths and data schemas decorated with the
/// `#[utoipa::path]` and `#[derive(utoipa::ToSchema)]` macros.
/// The resulting JSON is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::posts::list_posts, handlers::posts::get_post, handlers::posts::create_post,
        handlers::posts::update_post, handlers::posts::delete_post,
        handlers::projects::list_projects, handlers::projects::get_project,
        handlers::projects::create_project, handlers::projects::update_project,
        handlers::projects::delete_project,
        handlers::partners::list_partners, handlers::partners::create_partner,
        handlers::partners::update_partner, handlers::partners::delete_partner,
        handlers::team_members::list_team_members, handlers::team_members::create_team_member,
        handlers::team_members::update_team_member, handlers::team_members::delete_team_member,
        handlers::users::list_users, handlers::users::get_user, handlers::users::create_user,
        handlers::users::update_user, handlers::users::delete_user,
        handlers::session::login, handlers::session::get_me,
        handlers::upload::upload_file,
    ),
    components(
        schemas(
            models::User, models::Post, models::ContentSection, models::Project,
            models::Partner, models::TeamMember,
            models::PostInput, models::ContentSectionInput, models::ProjectInput,
            models::PartnerInput, models::TeamMemberInput, models::UserInput,
            models::LoginRequest, models::LoginResponse, models::SessionUser,
            models::UploadResponse, models::DeleteResponse, models::MessageResponse,
            errors::ErrorBody,
        )
    ),
    tags(
        (name = "cms-admin", description = "Marketing-site CMS admin API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Implements the **Unified State Pattern**. This is the single, thread-safe, and
/// immutable container holding all essential application services and
/// configuration, shared across all incoming requests. Handlers hold no cached
/// state of their own; the repository's pool is the only shared handle.
#[derive(Clone)]
pub struct AppState {
    /// Repository Layer: Abstracts database access via the SQLite pool.
    pub repo: RepositoryState,
    /// Storage Layer: Abstracts file ingest to the public upload directory.
    pub storage: StorageState,
    /// Configuration: The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These implementations allow extractors (notably AuthUser) to selectively pull
// components from the shared AppState.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for StorageState {
    fn from_ref(app_state: &AppState) -> StorageState {
        app_state.storage.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global
/// middleware, and registers the application state.
///
/// The access gate is not a router layer here: it is the `AuthUser` extractor in
/// each gated handler's signature, because most collection paths mix a public
/// GET with gated writes.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Gateway routes: health probe and login.
        .merge(public::public_routes())
        // Content collections, file ingest, session identity.
        .merge(content::content_routes())
        // User management (ADMIN only, enforced in the handlers).
        .merge(admin::admin_routes())
        // Ingested files are served straight back from the public directory.
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        // Apply the Unified State to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (Applied outermost/first)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: a unique UUID for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: wraps the request/response lifecycle in a
                // tracing span that carries the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation: returns x-request-id to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer
        .layer(cors)
}

/// trace_span_logger
///
/// Helper function used by `TraceLayer` to customize the tracing span creation.
/// It extracts the `x-request-id` header (if present) and includes it in the
/// structured logging metadata alongside the HTTP method and URI, so every log
/// line for a single request is correlated by a unique ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
