//! HTTP route handlers, one module per resource.
//!
//! Each handler binds the same three layers in the same order: the access gate
//! (the `AuthUser` extractor argument, where the route is not public), the
//! validation layer (`crate::validators`), and the entity repository. Handlers
//! hold no state of their own between requests.

pub mod partners;
pub mod posts;
pub mod projects;
pub mod session;
pub mod team_members;
pub mod upload;
pub mod users;
