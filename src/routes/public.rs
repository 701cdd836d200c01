use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Gateway endpoints that are **unauthenticated** by design: the health probe
/// and the credential check that opens a session in the first place. The public
/// content reads live in the content router alongside their gated writes.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring and load
        // balancer checks. Returns "ok" immediately.
        .route("/health", get(|| async { "ok" }))
        // POST /api/auth/login
        // Verifies an email/password pair and issues the signed session token
        // carried by every subsequent dashboard request.
        .route("/api/auth/login", post(handlers::session::login))
}
