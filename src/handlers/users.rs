use crate::{
    AppState,
    auth::{self, AuthUser},
    errors::ApiError,
    models::{DeleteResponse, User, UserInput},
    validators,
};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// The user collection is the one resource with a role requirement on top of the
// session check: every verb here demands ADMIN, enforced before validation and
// before any repository call. The password hash never leaves the server; the
// User model skips it during serialization.

/// list_users
///
/// [Admin Route] Lists all non-deleted user accounts, most recent first.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 401, description = "No session or not ADMIN")
    )
)]
pub async fn list_users(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, ApiError> {
    auth.require_admin()?;
    Ok(Json(state.repo.list_users().await?))
}

/// get_user
///
/// [Admin Route] Retrieves a single non-deleted user account.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Found", body = User),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    auth.require_admin()?;
    state
        .repo
        .get_user(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

/// create_user
///
/// [Admin Route] Creates a staff account. The plaintext password is hashed with
/// Argon2id here and only the hash is persisted.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserInput,
    responses(
        (status = 200, description = "Created", body = User),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "No session or not ADMIN")
    )
)]
pub async fn create_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<UserInput>,
) -> Result<Json<User>, ApiError> {
    auth.require_admin()?;
    let (data, password) = validators::validate_user(payload).map_err(ApiError::Validation)?;
    let password_hash = auth::hash_password(&password)?;
    Ok(Json(state.repo.create_user(data, password_hash).await?))
}

/// update_user
///
/// [Admin Route] Partial update. A supplied password is rehashed; an omitted one
/// leaves the stored hash untouched.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UserInput,
    responses(
        (status = 200, description = "Updated", body = User),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UserInput>,
) -> Result<Json<User>, ApiError> {
    auth.require_admin()?;
    let (update, password) =
        validators::validate_user_update(payload).map_err(ApiError::Validation)?;
    let password_hash = match password {
        Some(p) => Some(auth::hash_password(&p)?),
        None => None,
    };
    state
        .repo
        .update_user(id, update, password_hash)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

/// delete_user
///
/// [Admin Route] Soft delete. The account disappears from all queries and its
/// sessions stop resolving, but the row (and audit trail) remains in storage.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted", body = DeleteResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    auth.require_admin()?;
    if state.repo.soft_delete_user(id).await? {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(ApiError::NotFound("User not found".to_string()))
    }
}
