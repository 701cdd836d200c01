use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// ApiError
///
/// The application-wide error taxonomy, mapped onto the HTTP surface:
/// - `Unauthorized` -> 401 (missing/invalid session, or insufficient role)
/// - `Validation`   -> 400 (first failing rule's message)
/// - `NotFound`     -> 404 (no matching non-deleted record)
/// - `Internal`     -> 500 (storage/I/O failure; detail logged, never surfaced)
///
/// Every failure serializes to the `{"error": string}` envelope expected by the
/// dashboard frontend. There are no retries anywhere: a failure is terminal for
/// its request.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    Validation(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The caller-facing message. Internal detail stays in the logs.
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Unauthorized".to_string(),
            ApiError::Validation(msg) => msg.clone(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Internal(detail) => write!(f, "internal error: {}", detail),
            other => write!(f, "{}", other.message()),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("database error: {:?}", err);
        ApiError::Internal(format!("database error: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("json error: {:?}", err);
        ApiError::Internal(format!("json error: {}", err))
    }
}

/// ErrorBody
///
/// The wire shape of every failure response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            // Surface only a generic message; the detail belongs to the operator.
            tracing::error!("request failed: {}", detail);
        }
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
