use crate::{AppState, auth::AuthUser, errors::ApiError, models::UploadResponse};
use axum::{
    Json,
    extract::{Multipart, State},
};

/// upload_file
///
/// [Authenticated Route] Accepts exactly one `file` field from a multipart
/// request, writes it to public storage under a collision-resistant unique name,
/// and returns its public URL.
///
/// No content-type or size validation is performed on the payload itself.
#[utoipa::path(
    post,
    path = "/api/upload",
    responses(
        (status = 200, description = "Stored", body = UploadResponse),
        (status = 400, description = "No file field"),
        (status = 401, description = "No session")
    )
)]
pub async fn upload_file(
    _auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Validation(format!("Failed to read upload: {}", e)))?;

        let url = state
            .storage
            .store_file(&original_name, &bytes)
            .await
            .map_err(ApiError::Internal)?;

        return Ok(Json(UploadResponse { success: true, url }));
    }

    Err(ApiError::Validation("No file uploaded".to_string()))
}
