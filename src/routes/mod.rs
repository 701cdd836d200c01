//! Router Module Index
//!
//! Organizes the application's routing logic into security-segregated modules.
//! Each path is owned by exactly one module; the access gate is applied per
//! handler via the `AuthUser` extractor, so mixed-visibility paths (public read,
//! gated write) stay together.

/// Unauthenticated gateway routes (health probe, login).
pub mod public;

/// The content collections (posts, projects, partners, team members), file
/// ingest, and the session-identity endpoint.
pub mod content;

/// User management, restricted to the ADMIN role on every verb.
pub mod admin;
