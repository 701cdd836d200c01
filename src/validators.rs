//! Per-entity input validation.
//!
//! One validator per resource, evaluated synchronously against the parsed request
//! body before any repository call. Each returns the normalized write model on
//! success or the first failing rule's human-readable message on failure (the
//! route maps that message onto a 400 response). Unknown fields never reach this
//! layer; serde drops them during deserialization.

use crate::models::{
    ContentSection, PartnerData, PartnerInput, PostData, PostInput, ProjectData, ProjectInput,
    TeamMemberData, TeamMemberInput, TeamMemberUpdate, UserData, UserInput, UserUpdate,
};

const POST_STATUSES: [&str; 2] = ["DRAFT", "PUBLISHED"];
const USER_ROLES: [&str; 2] = ["ADMIN", "EDITOR"];
const USER_STATUSES: [&str; 2] = ["ACTIVE", "INACTIVE"];
const MEMBER_TYPES: [&str; 2] = ["TEAM", "ADVISOR"];

/// Collapses a missing or empty-string optional field to `None`.
/// Dashboard forms submit `""` for cleared fields; the store keeps NULL.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Minimal structural email check: one `@` with a non-empty local part and a
/// dotted domain. Deliverability is not this layer's concern.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn require_enum(value: &str, allowed: &[&str], message: &str) -> Result<(), String> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// validate_post
///
/// Full-schema check used by both create and overwrite. Title and status are
/// required; each content section must carry a non-empty body.
pub fn validate_post(input: PostInput) -> Result<PostData, String> {
    let title = input
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| "Post Name is required".to_string())?;

    let status = input
        .status
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "Status must be DRAFT or PUBLISHED".to_string())?;
    require_enum(&status, &POST_STATUSES, "Status must be DRAFT or PUBLISHED")?;

    let mut content_sections = Vec::new();
    for section in input.content_sections.unwrap_or_default() {
        let body = section
            .body
            .filter(|b| !b.is_empty())
            .ok_or_else(|| "Section content is required".to_string())?;
        content_sections.push(ContentSection {
            subtitle: non_empty(section.subtitle),
            body,
        });
    }

    Ok(PostData {
        title,
        slug: non_empty(input.slug),
        excerpt: non_empty(input.excerpt),
        content_sections,
        featured_image: non_empty(input.featured_image),
        status,
    })
}

/// validate_project
///
/// Full-schema check used by both create and overwrite.
pub fn validate_project(input: ProjectInput) -> Result<ProjectData, String> {
    let title = input
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| "Title is required".to_string())?;

    let description = input
        .description
        .filter(|d| !d.is_empty())
        .ok_or_else(|| "Description is required".to_string())?;

    let status = input
        .status
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "Status must be DRAFT or PUBLISHED".to_string())?;
    require_enum(&status, &POST_STATUSES, "Status must be DRAFT or PUBLISHED")?;

    Ok(ProjectData {
        title,
        summary: non_empty(input.summary),
        description,
        location: non_empty(input.location),
        category: non_empty(input.category),
        focus_areas: input.focus_areas.unwrap_or_default(),
        status,
        cover_image: non_empty(input.cover_image),
        start_date: non_empty(input.start_date),
        end_date: non_empty(input.end_date),
    })
}

/// validate_partner
///
/// Name is required; an empty url is normalized to NULL, a non-empty one must be
/// an http(s) link.
pub fn validate_partner(input: PartnerInput) -> Result<PartnerData, String> {
    let name = input
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| "Name is required".to_string())?;

    let url = non_empty(input.url);
    if let Some(u) = &url {
        if !u.starts_with("http://") && !u.starts_with("https://") {
            return Err("URL must start with http:// or https://".to_string());
        }
    }

    Ok(PartnerData {
        name,
        image: non_empty(input.image),
        url,
    })
}

/// validate_team_member
///
/// Creation schema: minimum lengths on the text fields, defaulting `is_active`
/// to true and the member type to TEAM.
pub fn validate_team_member(input: TeamMemberInput) -> Result<TeamMemberData, String> {
    let name = input.name.unwrap_or_default();
    if name.chars().count() < 2 {
        return Err("Name must be at least 2 characters".to_string());
    }

    let title = input.title.unwrap_or_default();
    if title.chars().count() < 2 {
        return Err("Title must be at least 2 characters".to_string());
    }

    let description = input.description.unwrap_or_default();
    if description.chars().count() < 10 {
        return Err("Description must be at least 10 characters".to_string());
    }

    let member_type = input.member_type.unwrap_or_else(|| "TEAM".to_string());
    require_enum(&member_type, &MEMBER_TYPES, "Type must be TEAM or ADVISOR")?;

    Ok(TeamMemberData {
        name,
        title,
        description,
        image: non_empty(input.image),
        member_type,
        is_active: input.is_active.unwrap_or(true),
    })
}

/// validate_team_member_update
///
/// Partial schema: every field optional, but a provided field must still pass
/// the creation rules.
pub fn validate_team_member_update(input: TeamMemberInput) -> Result<TeamMemberUpdate, String> {
    if let Some(name) = &input.name {
        if name.chars().count() < 2 {
            return Err("Name must be at least 2 characters".to_string());
        }
    }
    if let Some(title) = &input.title {
        if title.chars().count() < 2 {
            return Err("Title must be at least 2 characters".to_string());
        }
    }
    if let Some(description) = &input.description {
        if description.chars().count() < 10 {
            return Err("Description must be at least 10 characters".to_string());
        }
    }
    if let Some(member_type) = &input.member_type {
        require_enum(member_type, &MEMBER_TYPES, "Type must be TEAM or ADVISOR")?;
    }

    Ok(TeamMemberUpdate {
        name: input.name,
        title: input.title,
        description: input.description,
        image: non_empty(input.image),
        member_type: input.member_type,
        is_active: input.is_active,
    })
}

/// validate_user
///
/// Creation schema. The plaintext password is checked here but hashed by the
/// caller; it never enters a write model.
pub fn validate_user(input: UserInput) -> Result<(UserData, String), String> {
    let name = input
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| "Name is required".to_string())?;

    let email = input.email.unwrap_or_default();
    if !is_valid_email(&email) {
        return Err("Invalid email address".to_string());
    }

    let password = input.password.unwrap_or_default();
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }

    let role = input
        .role
        .filter(|r| !r.is_empty())
        .ok_or_else(|| "Role must be ADMIN or EDITOR".to_string())?;
    require_enum(&role, &USER_ROLES, "Role must be ADMIN or EDITOR")?;

    let status = input.status.unwrap_or_else(|| "ACTIVE".to_string());
    require_enum(&status, &USER_STATUSES, "Status must be ACTIVE or INACTIVE")?;

    Ok((
        UserData {
            name,
            email,
            role,
            image: non_empty(input.image),
            status,
        },
        password,
    ))
}

/// validate_user_update
///
/// Partial schema. Returns the optional plaintext password alongside the update
/// so the route can decide whether to recompute the stored hash.
pub fn validate_user_update(input: UserInput) -> Result<(UserUpdate, Option<String>), String> {
    if let Some(name) = &input.name {
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
    }
    if let Some(email) = &input.email {
        if !is_valid_email(email) {
            return Err("Invalid email address".to_string());
        }
    }
    let password = input.password.filter(|p| !p.is_empty());
    if let Some(p) = &password {
        if p.chars().count() < 6 {
            return Err("Password must be at least 6 characters".to_string());
        }
    }
    if let Some(role) = &input.role {
        require_enum(role, &USER_ROLES, "Role must be ADMIN or EDITOR")?;
    }
    if let Some(status) = &input.status {
        require_enum(status, &USER_STATUSES, "Status must be ACTIVE or INACTIVE")?;
    }

    Ok((
        UserUpdate {
            name: input.name,
            email: input.email,
            role: input.role,
            image: non_empty(input.image),
            status: input.status,
        },
        password,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentSectionInput;

    #[test]
    fn post_requires_title_and_status() {
        let err = validate_post(PostInput::default()).unwrap_err();
        assert_eq!(err, "Post Name is required");

        let err = validate_post(PostInput {
            title: Some("Harvest report".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, "Status must be DRAFT or PUBLISHED");

        let err = validate_post(PostInput {
            title: Some("Harvest report".into()),
            status: Some("ARCHIVED".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, "Status must be DRAFT or PUBLISHED");
    }

    #[test]
    fn post_section_body_required() {
        let err = validate_post(PostInput {
            title: Some("Harvest report".into()),
            status: Some("DRAFT".into()),
            content_sections: Some(vec![ContentSectionInput {
                subtitle: Some("Intro".into()),
                body: None,
            }]),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, "Section content is required");
    }

    #[test]
    fn post_normalizes_empty_optionals() {
        let data = validate_post(PostInput {
            title: Some("Harvest report".into()),
            status: Some("DRAFT".into()),
            slug: Some("".into()),
            featured_image: Some("".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(data.slug.is_none());
        assert!(data.featured_image.is_none());
    }

    #[test]
    fn partner_requires_name() {
        let err = validate_partner(PartnerInput::default()).unwrap_err();
        assert_eq!(err, "Name is required");
    }

    #[test]
    fn partner_empty_url_stored_as_null() {
        let data = validate_partner(PartnerInput {
            name: Some("Acme".into()),
            url: Some("".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(data.url.is_none());
    }

    #[test]
    fn partner_url_must_be_http() {
        let err = validate_partner(PartnerInput {
            name: Some("Acme".into()),
            url: Some("ftp://acme.example".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, "URL must start with http:// or https://");

        let data = validate_partner(PartnerInput {
            name: Some("Acme".into()),
            url: Some("https://acme.example".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(data.url.as_deref(), Some("https://acme.example"));
    }

    #[test]
    fn team_member_length_rules() {
        let err = validate_team_member(TeamMemberInput {
            name: Some("A".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, "Name must be at least 2 characters");

        let err = validate_team_member(TeamMemberInput {
            name: Some("Amina".into()),
            title: Some("Agronomist".into()),
            description: Some("too short".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, "Description must be at least 10 characters");
    }

    #[test]
    fn team_member_defaults() {
        let data = validate_team_member(TeamMemberInput {
            name: Some("Amina".into()),
            title: Some("Agronomist".into()),
            description: Some("Leads the field research program.".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(data.is_active);
        assert_eq!(data.member_type, "TEAM");
    }

    #[test]
    fn team_member_update_is_partial() {
        let update = validate_team_member_update(TeamMemberInput {
            is_active: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert!(update.name.is_none());
        assert_eq!(update.is_active, Some(false));
    }

    #[test]
    fn user_email_and_password_rules() {
        let err = validate_user(UserInput {
            name: Some("Sam".into()),
            email: Some("not-an-email".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, "Invalid email address");

        let err = validate_user(UserInput {
            name: Some("Sam".into()),
            email: Some("sam@efarming.local".into()),
            password: Some("short".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, "Password must be at least 6 characters");

        let err = validate_user(UserInput {
            name: Some("Sam".into()),
            email: Some("sam@efarming.local".into()),
            password: Some("secret-enough".into()),
            role: Some("OWNER".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, "Role must be ADMIN or EDITOR");
    }

    #[test]
    fn user_create_defaults_to_active() {
        let (data, password) = validate_user(UserInput {
            name: Some("Sam".into()),
            email: Some("sam@efarming.local".into()),
            password: Some("secret-enough".into()),
            role: Some("EDITOR".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(data.status, "ACTIVE");
        assert_eq!(password, "secret-enough");
    }

    #[test]
    fn user_update_password_optional() {
        let (update, password) = validate_user_update(UserInput {
            name: Some("Sam".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(update.name.as_deref(), Some("Sam"));
        assert!(password.is_none());

        // An empty password field means "unchanged", not "set to empty".
        let (_, password) = validate_user_update(UserInput {
            password: Some("".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(password.is_none());
    }
}
