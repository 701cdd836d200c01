use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Content Router Module
///
/// The resource routes for the four content collections plus file ingest and the
/// session-identity endpoint. Access control is applied per handler via the
/// `AuthUser` extractor rather than a router-wide layer, because several paths
/// mix public reads with gated writes (e.g. `GET /api/posts` is anonymous while
/// `POST /api/posts` requires a session).
///
/// Gate summary:
/// - posts, projects, partners: reads public, writes gated.
/// - team-members: every verb gated (dashboard-only resource).
/// - upload, me: gated.
pub fn content_routes() -> Router<AppState> {
    Router::new()
        // --- Posts ---
        // Collection: public list, gated create.
        .route(
            "/api/posts",
            get(handlers::posts::list_posts).post(handlers::posts::create_post),
        )
        // Item: public read, gated overwrite and soft delete.
        .route(
            "/api/posts/{id}",
            get(handlers::posts::get_post)
                .patch(handlers::posts::update_post)
                .delete(handlers::posts::delete_post),
        )
        // --- Projects ---
        .route(
            "/api/projects",
            get(handlers::projects::list_projects).post(handlers::projects::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(handlers::projects::get_project)
                .patch(handlers::projects::update_project)
                .delete(handlers::projects::delete_project),
        )
        // --- Partners ---
        // No public item route; the site only ever renders the full list.
        .route(
            "/api/partners",
            get(handlers::partners::list_partners).post(handlers::partners::create_partner),
        )
        .route(
            "/api/partners/{id}",
            axum::routing::patch(handlers::partners::update_partner)
                .delete(handlers::partners::delete_partner),
        )
        // --- Team Members ---
        .route(
            "/api/team-members",
            get(handlers::team_members::list_team_members)
                .post(handlers::team_members::create_team_member),
        )
        .route(
            "/api/team-members/{id}",
            axum::routing::patch(handlers::team_members::update_team_member)
                .delete(handlers::team_members::delete_team_member),
        )
        // --- File Ingest ---
        // POST /api/upload
        // Single multipart `file` field in, public URL out. Gated: uploads write
        // to the shared public directory.
        .route("/api/upload", post(handlers::upload::upload_file))
        // GET /api/me
        // Resolved session identity for the dashboard shell.
        .route("/api/me", get(handlers::session::get_me))
}
