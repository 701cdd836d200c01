use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Core Application Schemas (Mapped to Database) ---

/// User
///
/// A staff account able to sign in to the dashboard. The `role` field gates the
/// user-management routes (ADMIN only), while `status` marks the account as
/// ACTIVE or INACTIVE independently of the soft-delete flag.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    // Unique login identifier.
    pub email: String,
    // RBAC field: "ADMIN" or "EDITOR".
    pub role: String,
    pub image: Option<String>,
    // "ACTIVE" or "INACTIVE". Visible-but-flagged, distinct from soft deletion.
    pub status: String,

    /// Argon2id PHC hash. Never serialized to clients or exported to the frontend.
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    #[schema(ignore)]
    pub password_hash: String,

    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

/// ContentSection
///
/// One ordered block of a post body: an optional subtitle plus the section text.
/// Stored as a JSON array in the `content_sections` column.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContentSection {
    pub subtitle: Option<String>,
    pub body: String,
}

/// Post
///
/// A news post. `published_at` is derived: non-null iff `status == "PUBLISHED"`,
/// recomputed identically on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content_sections: Vec<ContentSection>,
    pub featured_image: Option<String>,
    // "DRAFT" or "PUBLISHED".
    pub status: String,
    #[ts(type = "string | null")]
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: Uuid,

    /// Display name of the author, loaded via a JOIN on the list query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

/// Project
///
/// An organization project shown on the marketing site. `end_date` absent means
/// the project is ongoing. Dates are stored verbatim as provided by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub summary: Option<String>,
    pub description: String,
    pub location: Option<String>,
    pub category: Option<String>,
    pub focus_areas: Vec<String>,
    // "DRAFT" or "PUBLISHED".
    pub status: String,
    pub cover_image: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

/// Partner
///
/// A partner organization: a logo plus an optional external link. No lifecycle
/// beyond the shared soft-delete convention.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub url: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

/// TeamMember
///
/// A person on the team page. `member_type` distinguishes core team from the
/// advisory board; `is_active` is independent of the soft-delete flag.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,

    // "TEAM" or "ADVISOR". Sent as "type" in JSON for frontend compatibility;
    // `type` is a reserved keyword in Rust.
    #[serde(rename = "type")]
    pub member_type: String,

    pub is_active: bool,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

// --- Request Payloads (Input Schemas) ---
//
// Every field is optional at the deserialization boundary; the validators in
// `crate::validators` decide what is required and with which message. Unknown
// JSON fields are silently ignored by serde, matching the dashboard contract.

/// LoginRequest
///
/// Input payload for the credential check (POST /api/auth/login).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// SessionUser
///
/// The identity snapshot embedded in a login response, mirroring the claims
/// carried by the issued session token.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// LoginResponse
///
/// Output of a successful credential check: a signed session token plus the
/// resolved identity for the dashboard header.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// ContentSectionInput
///
/// Raw section payload before validation. `body` is checked as required with a
/// field-specific message rather than rejected at the deserialization layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContentSectionInput {
    pub subtitle: Option<String>,
    pub body: Option<String>,
}

/// PostInput
///
/// Input payload for creating or overwriting a post (POST /api/posts,
/// PATCH /api/posts/{id}).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PostInput {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content_sections: Option<Vec<ContentSectionInput>>,
    pub featured_image: Option<String>,
    pub status: Option<String>,
}

/// ProjectInput
///
/// Input payload for creating or overwriting a project.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProjectInput {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub focus_areas: Option<Vec<String>>,
    pub status: Option<String>,
    pub cover_image: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// PartnerInput
///
/// Input payload for creating or overwriting a partner.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PartnerInput {
    pub name: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

/// TeamMemberInput
///
/// Input payload for team members. Creation requires name/title/description;
/// PATCH treats every field as optional (partial update).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TeamMemberInput {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub member_type: Option<String>,
    pub is_active: Option<bool>,
}

/// UserInput
///
/// Input payload for user accounts. Creation requires name/email/password/role;
/// PUT treats every field as optional and only rehashes when a password is sent.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
}

// --- Validated Write Models ---
//
// Produced by the validators, consumed by the repository. These carry only
// normalized, known-good data; derived fields (e.g. `published_at`) are computed
// by the repository at write time.

#[derive(Debug, Clone)]
pub struct PostData {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content_sections: Vec<ContentSection>,
    pub featured_image: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct ProjectData {
    pub title: String,
    pub summary: Option<String>,
    pub description: String,
    pub location: Option<String>,
    pub category: Option<String>,
    pub focus_areas: Vec<String>,
    pub status: String,
    pub cover_image: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PartnerData {
    pub name: String,
    pub image: Option<String>,
    // Normalized: an empty string from the form is stored as NULL.
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TeamMemberData {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub member_type: String,
    pub is_active: bool,
}

/// Partial team-member update; only `Some` fields overwrite stored columns.
#[derive(Debug, Clone, Default)]
pub struct TeamMemberUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub member_type: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub role: String,
    pub image: Option<String>,
    pub status: String,
}

/// Partial user update; the password hash travels separately so an omitted
/// password leaves the stored hash untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
}

/// UploadResponse
///
/// Output of the file-ingest route: the public URL of the stored file.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}

/// DeleteResponse
///
/// Output of every soft-delete route.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeleteResponse {
    pub success: bool,
}

/// MessageResponse
///
/// Plain message envelope used by the team-member delete route.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
}
