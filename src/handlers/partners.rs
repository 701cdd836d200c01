use crate::{
    AppState,
    auth::AuthUser,
    errors::ApiError,
    models::{DeleteResponse, Partner, PartnerInput},
    validators,
};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// list_partners
///
/// [Public Route] Lists all non-deleted partners, most recent first.
#[utoipa::path(
    get,
    path = "/api/partners",
    responses((status = 200, description = "All partners", body = [Partner]))
)]
pub async fn list_partners(State(state): State<AppState>) -> Result<Json<Vec<Partner>>, ApiError> {
    Ok(Json(state.repo.list_partners().await?))
}

/// create_partner
///
/// [Authenticated Route] Creates a partner. An empty url in the payload is
/// normalized to NULL by the validator.
#[utoipa::path(
    post,
    path = "/api/partners",
    request_body = PartnerInput,
    responses(
        (status = 200, description = "Created", body = Partner),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "No session")
    )
)]
pub async fn create_partner(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<PartnerInput>,
) -> Result<Json<Partner>, ApiError> {
    let data = validators::validate_partner(payload).map_err(ApiError::Validation)?;
    Ok(Json(state.repo.create_partner(data).await?))
}

/// update_partner
///
/// [Authenticated Route] Full overwrite of a partner's mutable fields.
#[utoipa::path(
    patch,
    path = "/api/partners/{id}",
    params(("id" = Uuid, Path, description = "Partner ID")),
    request_body = PartnerInput,
    responses(
        (status = 200, description = "Updated", body = Partner),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_partner(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PartnerInput>,
) -> Result<Json<Partner>, ApiError> {
    let data = validators::validate_partner(payload).map_err(ApiError::Validation)?;
    state
        .repo
        .update_partner(id, data)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Partner not found".to_string()))
}

/// delete_partner
///
/// [Authenticated Route] Soft delete; the exclusive deletion mechanism for partners.
#[utoipa::path(
    delete,
    path = "/api/partners/{id}",
    params(("id" = Uuid, Path, description = "Partner ID")),
    responses(
        (status = 200, description = "Deleted", body = DeleteResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_partner(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if state.repo.soft_delete_partner(id).await? {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(ApiError::NotFound("Partner not found".to_string()))
    }
}
