use crate::{
    AppState,
    auth::AuthUser,
    errors::ApiError,
    models::{MessageResponse, TeamMember, TeamMemberInput},
    validators,
};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// Unlike posts/projects/partners, team-member reads are dashboard-only: every
// route here sits behind the access gate, including the listing.

/// list_team_members
///
/// [Authenticated Route] Lists all non-deleted team members, most recent first.
#[utoipa::path(
    get,
    path = "/api/team-members",
    responses(
        (status = 200, description = "All team members", body = [TeamMember]),
        (status = 401, description = "No session")
    )
)]
pub async fn list_team_members(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamMember>>, ApiError> {
    Ok(Json(state.repo.list_team_members().await?))
}

/// create_team_member
///
/// [Authenticated Route] Creates a team member. `is_active` defaults to true.
#[utoipa::path(
    post,
    path = "/api/team-members",
    request_body = TeamMemberInput,
    responses(
        (status = 200, description = "Created", body = TeamMember),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "No session")
    )
)]
pub async fn create_team_member(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<TeamMemberInput>,
) -> Result<Json<TeamMember>, ApiError> {
    let data = validators::validate_team_member(payload).map_err(ApiError::Validation)?;
    Ok(Json(state.repo.create_team_member(data).await?))
}

/// update_team_member
///
/// [Authenticated Route] Partial update: only fields present in the payload
/// overwrite stored columns. `is_active` can be toggled independently of the
/// soft-delete flag.
#[utoipa::path(
    patch,
    path = "/api/team-members/{id}",
    params(("id" = Uuid, Path, description = "Team member ID")),
    request_body = TeamMemberInput,
    responses(
        (status = 200, description = "Updated", body = TeamMember),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_team_member(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TeamMemberInput>,
) -> Result<Json<TeamMember>, ApiError> {
    let update = validators::validate_team_member_update(payload).map_err(ApiError::Validation)?;
    state
        .repo
        .update_team_member(id, update)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Team member not found".to_string()))
}

/// delete_team_member
///
/// [Authenticated Route] Soft delete; the exclusive deletion mechanism for team
/// members.
#[utoipa::path(
    delete,
    path = "/api/team-members/{id}",
    params(("id" = Uuid, Path, description = "Team member ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_team_member(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.repo.soft_delete_team_member(id).await? {
        Ok(Json(MessageResponse {
            message: "Team member deleted".to_string(),
        }))
    } else {
        Err(ApiError::NotFound("Team member not found".to_string()))
    }
}
