use crate::{
    AppState,
    auth::AuthUser,
    errors::ApiError,
    models::{DeleteResponse, Project, ProjectInput},
    validators,
};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// list_projects
///
/// [Public Route] Lists all non-deleted projects, most recent first.
#[utoipa::path(
    get,
    path = "/api/projects",
    responses((status = 200, description = "All projects", body = [Project]))
)]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.repo.list_projects().await?))
}

/// get_project
///
/// [Public Route] Retrieves a single non-deleted project by ID.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Found", body = Project),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, ApiError> {
    state
        .repo
        .get_project(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))
}

/// create_project
///
/// [Authenticated Route] Creates a project from a validated payload.
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = ProjectInput,
    responses(
        (status = 200, description = "Created", body = Project),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "No session")
    )
)]
pub async fn create_project(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ProjectInput>,
) -> Result<Json<Project>, ApiError> {
    let data = validators::validate_project(payload).map_err(ApiError::Validation)?;
    Ok(Json(state.repo.create_project(data).await?))
}

/// update_project
///
/// [Authenticated Route] Full overwrite of a project's mutable fields.
#[utoipa::path(
    patch,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = ProjectInput,
    responses(
        (status = 200, description = "Updated", body = Project),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_project(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProjectInput>,
) -> Result<Json<Project>, ApiError> {
    let data = validators::validate_project(payload).map_err(ApiError::Validation)?;
    state
        .repo
        .update_project(id, data)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))
}

/// delete_project
///
/// [Authenticated Route] Soft delete; the exclusive deletion mechanism for projects.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Deleted", body = DeleteResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_project(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if state.repo.soft_delete_project(id).await? {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(ApiError::NotFound("Project not found".to_string()))
    }
}
