use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Admin Router Module
///
/// The user-management collection, restricted to the ADMIN role on every verb —
/// including reads, since account listings expose staff emails.
///
/// Access Control:
/// Each handler resolves the session via the `AuthUser` extractor and then calls
/// `require_admin()` before validation and before any repository call. A missing
/// session and an insufficient role are indistinguishable to the caller: both 401.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /api/users — list accounts; POST — create one (password hashed
        // server-side, never stored or returned in plaintext).
        .route(
            "/api/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        // Item routes. Update is a PUT (the dashboard sends the full form),
        // though the schema itself is partial: omitted fields keep their stored
        // values, and an omitted password keeps the stored hash.
        .route(
            "/api/users/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
}
