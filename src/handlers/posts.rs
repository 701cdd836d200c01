use crate::{
    AppState,
    auth::AuthUser,
    errors::ApiError,
    models::{DeleteResponse, Post, PostInput},
    validators,
};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// list_posts
///
/// [Public Route] Lists all non-deleted posts, most recent first, with the
/// author's display name included.
#[utoipa::path(
    get,
    path = "/api/posts",
    responses((status = 200, description = "All posts", body = [Post]))
)]
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.repo.list_posts().await?))
}

/// get_post
///
/// [Public Route] Retrieves a single non-deleted post by ID.
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Found", body = Post),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, ApiError> {
    state
        .repo
        .get_post(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))
}

/// create_post
///
/// [Authenticated Route] Creates a post authored by the session user.
/// `published_at` is derived from the incoming status at the repository layer.
#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = PostInput,
    responses(
        (status = 200, description = "Created", body = Post),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "No session")
    )
)]
pub async fn create_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<PostInput>,
) -> Result<Json<Post>, ApiError> {
    let data = validators::validate_post(payload).map_err(ApiError::Validation)?;
    Ok(Json(state.repo.create_post(data, auth.id).await?))
}

/// update_post
///
/// [Authenticated Route] Full overwrite of a post's mutable fields.
/// `published_at` is recomputed, so PUBLISHED -> DRAFT clears it.
#[utoipa::path(
    patch,
    path = "/api/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    request_body = PostInput,
    responses(
        (status = 200, description = "Updated", body = Post),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_post(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PostInput>,
) -> Result<Json<Post>, ApiError> {
    let data = validators::validate_post(payload).map_err(ApiError::Validation)?;
    state
        .repo
        .update_post(id, data)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))
}

/// delete_post
///
/// [Authenticated Route] Soft delete: the record stays in storage but disappears
/// from all subsequent list/get calls. The only deletion mechanism for posts.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Deleted", body = DeleteResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_post(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if state.repo.soft_delete_post(id).await? {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(ApiError::NotFound("Post not found".to_string()))
    }
}
