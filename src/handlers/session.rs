use crate::{
    AppState,
    auth::{self, AuthUser},
    errors::ApiError,
    models::{LoginRequest, LoginResponse, SessionUser},
};
use axum::{Json, extract::State};

/// login
///
/// [Public Route] The credential check: verifies an email/password pair against
/// the users table and issues a signed session token carrying the user's id,
/// role, and name.
///
/// Every failure mode (unknown email, soft-deleted account, INACTIVE status,
/// wrong password) reads identically to the caller: 401, no token. The specific
/// reason is not leaked.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .repo
        .get_user_by_email(&payload.email)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    // INACTIVE accounts keep their data but cannot open new sessions.
    if user.status != "ACTIVE" {
        return Err(ApiError::Unauthorized);
    }

    if !auth::verify_password(&payload.password, &user.password_hash)? {
        return Err(ApiError::Unauthorized);
    }

    let token = auth::issue_token(user.id, &user.role, &user.name, &state.config.jwt_secret)?;

    Ok(Json(LoginResponse {
        token,
        user: SessionUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        },
    }))
}

/// get_me
///
/// [Authenticated Route] Returns the resolved session identity. The dashboard
/// uses this on load to restore the header and role-dependent navigation.
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Session identity", body = SessionUser),
        (status = 401, description = "No session")
    )
)]
pub async fn get_me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<SessionUser>, ApiError> {
    let user = state
        .repo
        .get_user(auth.id)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    Ok(Json(SessionUser {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role,
    }))
}
