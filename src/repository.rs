use crate::errors::ApiError;
use crate::models::{
    Partner, PartnerData, Post, PostData, Project, ProjectData, TeamMember, TeamMemberData,
    TeamMemberUpdate, User, UserData, UserUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations. This is the core
/// of the Repository Abstraction pattern, allowing the handlers to interact with
/// the data layer without knowing the specific implementation (SQLite, Mock, etc.).
///
/// Uniform contract per entity: `list` returns all non-deleted records ordered by
/// creation time descending; `get` returns one non-deleted record or None;
/// `create`/`update` persist validated write models (recomputing derived fields);
/// `soft_delete` flips `is_deleted` and is the exclusive deletion mechanism for
/// every collection. No hard delete path exists.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's asynchronous task
/// boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Posts ---
    // Listing eagerly includes the author's display name via a JOIN.
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;
    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, ApiError>;
    async fn create_post(&self, data: PostData, author_id: Uuid) -> Result<Post, ApiError>;
    async fn update_post(&self, id: Uuid, data: PostData) -> Result<Option<Post>, ApiError>;
    async fn soft_delete_post(&self, id: Uuid) -> Result<bool, ApiError>;

    // --- Projects ---
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;
    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, ApiError>;
    async fn create_project(&self, data: ProjectData) -> Result<Project, ApiError>;
    async fn update_project(&self, id: Uuid, data: ProjectData)
    -> Result<Option<Project>, ApiError>;
    async fn soft_delete_project(&self, id: Uuid) -> Result<bool, ApiError>;

    // --- Partners ---
    async fn list_partners(&self) -> Result<Vec<Partner>, ApiError>;
    async fn get_partner(&self, id: Uuid) -> Result<Option<Partner>, ApiError>;
    async fn create_partner(&self, data: PartnerData) -> Result<Partner, ApiError>;
    async fn update_partner(&self, id: Uuid, data: PartnerData)
    -> Result<Option<Partner>, ApiError>;
    async fn soft_delete_partner(&self, id: Uuid) -> Result<bool, ApiError>;

    // --- Team Members ---
    async fn list_team_members(&self) -> Result<Vec<TeamMember>, ApiError>;
    async fn get_team_member(&self, id: Uuid) -> Result<Option<TeamMember>, ApiError>;
    async fn create_team_member(&self, data: TeamMemberData) -> Result<TeamMember, ApiError>;
    // Partial update: only `Some` fields overwrite stored columns (COALESCE).
    async fn update_team_member(
        &self,
        id: Uuid,
        update: TeamMemberUpdate,
    ) -> Result<Option<TeamMember>, ApiError>;
    async fn soft_delete_team_member(&self, id: Uuid) -> Result<bool, ApiError>;

    // --- Users ---
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    // Credential check lookup; excludes soft-deleted accounts like every query.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn create_user(&self, data: UserData, password_hash: String) -> Result<User, ApiError>;
    // `password_hash` of None leaves the stored hash untouched.
    async fn update_user(
        &self,
        id: Uuid,
        update: UserUpdate,
        password_hash: Option<String>,
    ) -> Result<Option<User>, ApiError>;
    async fn soft_delete_user(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// SqliteRepository
///
/// The concrete implementation of the `Repository` trait, backed by SQLite.
/// All queries are runtime-bound prepared statements.
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// --- Row Mapping Helpers ---
//
// IDs and timestamps are stored as TEXT (UUID / RFC 3339); list-valued columns
// as JSON TEXT. Mapping failures indicate a corrupted row and surface as 500s.

fn parse_uuid(value: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(value).map_err(|e| ApiError::Internal(format!("invalid uuid in row: {}", e)))
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ApiError::Internal(format!("invalid timestamp in row: {}", e)))
}

fn post_from_row(row: &SqliteRow) -> Result<Post, ApiError> {
    let sections: String = row.try_get("content_sections")?;
    let published_at: Option<String> = row.try_get("published_at")?;
    Ok(Post {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        title: row.try_get("title")?,
        slug: row.try_get("slug")?,
        excerpt: row.try_get("excerpt")?,
        content_sections: serde_json::from_str(&sections)?,
        featured_image: row.try_get("featured_image")?,
        status: row.try_get("status")?,
        published_at: published_at.as_deref().map(parse_timestamp).transpose()?,
        author_id: parse_uuid(&row.try_get::<String, _>("author_id")?)?,
        // Present only on the list query's JOIN projection.
        author_name: row.try_get("author_name").unwrap_or(None),
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?)?,
        is_deleted: row.try_get("is_deleted")?,
    })
}

fn project_from_row(row: &SqliteRow) -> Result<Project, ApiError> {
    let focus_areas: String = row.try_get("focus_areas")?;
    Ok(Project {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        title: row.try_get("title")?,
        summary: row.try_get("summary")?,
        description: row.try_get("description")?,
        location: row.try_get("location")?,
        category: row.try_get("category")?,
        focus_areas: serde_json::from_str(&focus_areas)?,
        status: row.try_get("status")?,
        cover_image: row.try_get("cover_image")?,
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?)?,
        is_deleted: row.try_get("is_deleted")?,
    })
}

fn partner_from_row(row: &SqliteRow) -> Result<Partner, ApiError> {
    Ok(Partner {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        name: row.try_get("name")?,
        image: row.try_get("image")?,
        url: row.try_get("url")?,
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?)?,
        is_deleted: row.try_get("is_deleted")?,
    })
}

fn team_member_from_row(row: &SqliteRow) -> Result<TeamMember, ApiError> {
    Ok(TeamMember {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        name: row.try_get("name")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        image: row.try_get("image")?,
        member_type: row.try_get("member_type")?,
        is_active: row.try_get("is_active")?,
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?)?,
        is_deleted: row.try_get("is_deleted")?,
    })
}

fn user_from_row(row: &SqliteRow) -> Result<User, ApiError> {
    Ok(User {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        role: row.try_get("role")?,
        image: row.try_get("image")?,
        status: row.try_get("status")?,
        password_hash: row.try_get("password_hash")?,
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?)?,
        is_deleted: row.try_get("is_deleted")?,
    })
}

#[async_trait]
impl Repository for SqliteRepository {
    // --- POSTS ---

    /// list_posts
    ///
    /// Non-deleted posts, most recent first, with the author's display name
    /// joined in (the dashboard's list view shows it).
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.title, p.slug, p.excerpt, p.content_sections, p.featured_image,
                   p.status, p.published_at, p.author_id, p.created_at, p.is_deleted,
                   u.name AS author_name
            FROM posts p
            LEFT JOIN users u ON p.author_id = u.id
            WHERE p.is_deleted = 0
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(post_from_row).collect()
    }

    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, ApiError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, slug, excerpt, content_sections, featured_image,
                   status, published_at, author_id, created_at, is_deleted
            FROM posts
            WHERE id = ? AND is_deleted = 0
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(post_from_row).transpose()
    }

    /// create_post
    ///
    /// Derived field: `published_at` is the current time iff the incoming status
    /// is PUBLISHED, otherwise NULL.
    async fn create_post(&self, data: PostData, author_id: Uuid) -> Result<Post, ApiError> {
        let now = Utc::now();
        let published_at = if data.status == "PUBLISHED" {
            Some(now)
        } else {
            None
        };

        let post = Post {
            id: Uuid::new_v4(),
            title: data.title,
            slug: data.slug,
            excerpt: data.excerpt,
            content_sections: data.content_sections,
            featured_image: data.featured_image,
            status: data.status,
            published_at,
            author_id,
            author_name: None,
            created_at: now,
            is_deleted: false,
        };

        sqlx::query(
            r#"
            INSERT INTO posts (id, title, slug, excerpt, content_sections, featured_image,
                               status, published_at, author_id, created_at, is_deleted)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0)
            "#,
        )
        .bind(post.id.to_string())
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(serde_json::to_string(&post.content_sections)?)
        .bind(&post.featured_image)
        .bind(&post.status)
        .bind(post.published_at.map(|t| t.to_rfc3339()))
        .bind(post.author_id.to_string())
        .bind(post.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(post)
    }

    /// update_post
    ///
    /// Full overwrite of mutable fields; `published_at` is recomputed identically
    /// to create, so a PUBLISHED -> DRAFT transition clears it.
    async fn update_post(&self, id: Uuid, data: PostData) -> Result<Option<Post>, ApiError> {
        let published_at = if data.status == "PUBLISHED" {
            Some(Utc::now().to_rfc3339())
        } else {
            None
        };

        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = ?, slug = ?, excerpt = ?, content_sections = ?, featured_image = ?,
                status = ?, published_at = ?
            WHERE id = ? AND is_deleted = 0
            "#,
        )
        .bind(&data.title)
        .bind(&data.slug)
        .bind(&data.excerpt)
        .bind(serde_json::to_string(&data.content_sections)?)
        .bind(&data.featured_image)
        .bind(&data.status)
        .bind(published_at)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_post(id).await
    }

    async fn soft_delete_post(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = sqlx::query("UPDATE posts SET is_deleted = 1 WHERE id = ? AND is_deleted = 0")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- PROJECTS ---

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, summary, description, location, category, focus_areas,
                   status, cover_image, start_date, end_date, created_at, is_deleted
            FROM projects
            WHERE is_deleted = 0
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, ApiError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, summary, description, location, category, focus_areas,
                   status, cover_image, start_date, end_date, created_at, is_deleted
            FROM projects
            WHERE id = ? AND is_deleted = 0
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    async fn create_project(&self, data: ProjectData) -> Result<Project, ApiError> {
        let project = Project {
            id: Uuid::new_v4(),
            title: data.title,
            summary: data.summary,
            description: data.description,
            location: data.location,
            category: data.category,
            focus_areas: data.focus_areas,
            status: data.status,
            cover_image: data.cover_image,
            start_date: data.start_date,
            end_date: data.end_date,
            created_at: Utc::now(),
            is_deleted: false,
        };

        sqlx::query(
            r#"
            INSERT INTO projects (id, title, summary, description, location, category,
                                  focus_areas, status, cover_image, start_date, end_date,
                                  created_at, is_deleted)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.title)
        .bind(&project.summary)
        .bind(&project.description)
        .bind(&project.location)
        .bind(&project.category)
        .bind(serde_json::to_string(&project.focus_areas)?)
        .bind(&project.status)
        .bind(&project.cover_image)
        .bind(&project.start_date)
        .bind(&project.end_date)
        .bind(project.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(project)
    }

    async fn update_project(
        &self,
        id: Uuid,
        data: ProjectData,
    ) -> Result<Option<Project>, ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET title = ?, summary = ?, description = ?, location = ?, category = ?,
                focus_areas = ?, status = ?, cover_image = ?, start_date = ?, end_date = ?
            WHERE id = ? AND is_deleted = 0
            "#,
        )
        .bind(&data.title)
        .bind(&data.summary)
        .bind(&data.description)
        .bind(&data.location)
        .bind(&data.category)
        .bind(serde_json::to_string(&data.focus_areas)?)
        .bind(&data.status)
        .bind(&data.cover_image)
        .bind(&data.start_date)
        .bind(&data.end_date)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_project(id).await
    }

    async fn soft_delete_project(&self, id: Uuid) -> Result<bool, ApiError> {
        let result =
            sqlx::query("UPDATE projects SET is_deleted = 1 WHERE id = ? AND is_deleted = 0")
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- PARTNERS ---

    async fn list_partners(&self) -> Result<Vec<Partner>, ApiError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, image, url, created_at, is_deleted
            FROM partners
            WHERE is_deleted = 0
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(partner_from_row).collect()
    }

    async fn get_partner(&self, id: Uuid) -> Result<Option<Partner>, ApiError> {
        let row = sqlx::query(
            "SELECT id, name, image, url, created_at, is_deleted FROM partners WHERE id = ? AND is_deleted = 0",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(partner_from_row).transpose()
    }

    async fn create_partner(&self, data: PartnerData) -> Result<Partner, ApiError> {
        let partner = Partner {
            id: Uuid::new_v4(),
            name: data.name,
            image: data.image,
            url: data.url,
            created_at: Utc::now(),
            is_deleted: false,
        };

        sqlx::query(
            "INSERT INTO partners (id, name, image, url, created_at, is_deleted) VALUES (?, ?, ?, ?, ?, 0)",
        )
        .bind(partner.id.to_string())
        .bind(&partner.name)
        .bind(&partner.image)
        .bind(&partner.url)
        .bind(partner.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(partner)
    }

    async fn update_partner(
        &self,
        id: Uuid,
        data: PartnerData,
    ) -> Result<Option<Partner>, ApiError> {
        let result = sqlx::query(
            "UPDATE partners SET name = ?, image = ?, url = ? WHERE id = ? AND is_deleted = 0",
        )
        .bind(&data.name)
        .bind(&data.image)
        .bind(&data.url)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_partner(id).await
    }

    async fn soft_delete_partner(&self, id: Uuid) -> Result<bool, ApiError> {
        let result =
            sqlx::query("UPDATE partners SET is_deleted = 1 WHERE id = ? AND is_deleted = 0")
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- TEAM MEMBERS ---

    async fn list_team_members(&self) -> Result<Vec<TeamMember>, ApiError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, title, description, image, member_type, is_active,
                   created_at, is_deleted
            FROM team_members
            WHERE is_deleted = 0
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(team_member_from_row).collect()
    }

    async fn get_team_member(&self, id: Uuid) -> Result<Option<TeamMember>, ApiError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, title, description, image, member_type, is_active,
                   created_at, is_deleted
            FROM team_members
            WHERE id = ? AND is_deleted = 0
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(team_member_from_row).transpose()
    }

    async fn create_team_member(&self, data: TeamMemberData) -> Result<TeamMember, ApiError> {
        let member = TeamMember {
            id: Uuid::new_v4(),
            name: data.name,
            title: data.title,
            description: data.description,
            image: data.image,
            member_type: data.member_type,
            is_active: data.is_active,
            created_at: Utc::now(),
            is_deleted: false,
        };

        sqlx::query(
            r#"
            INSERT INTO team_members (id, name, title, description, image, member_type,
                                      is_active, created_at, is_deleted)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0)
            "#,
        )
        .bind(member.id.to_string())
        .bind(&member.name)
        .bind(&member.title)
        .bind(&member.description)
        .bind(&member.image)
        .bind(&member.member_type)
        .bind(member.is_active)
        .bind(member.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(member)
    }

    /// update_team_member
    ///
    /// Partial update via COALESCE: only columns with a corresponding `Some`
    /// field are overwritten.
    async fn update_team_member(
        &self,
        id: Uuid,
        update: TeamMemberUpdate,
    ) -> Result<Option<TeamMember>, ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE team_members
            SET name = COALESCE(?, name),
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                image = COALESCE(?, image),
                member_type = COALESCE(?, member_type),
                is_active = COALESCE(?, is_active)
            WHERE id = ? AND is_deleted = 0
            "#,
        )
        .bind(&update.name)
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.image)
        .bind(&update.member_type)
        .bind(update.is_active)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_team_member(id).await
    }

    async fn soft_delete_team_member(&self, id: Uuid) -> Result<bool, ApiError> {
        let result =
            sqlx::query("UPDATE team_members SET is_deleted = 1 WHERE id = ? AND is_deleted = 0")
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- USERS ---

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, role, image, status, password_hash, created_at, is_deleted
            FROM users
            WHERE is_deleted = 0
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(user_from_row).collect()
    }

    /// get_user
    ///
    /// Also the access gate's session lookup: a soft-deleted user cannot
    /// authenticate even with a token that is still formally valid.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, role, image, status, password_hash, created_at, is_deleted
            FROM users
            WHERE id = ? AND is_deleted = 0
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, role, image, status, password_hash, created_at, is_deleted
            FROM users
            WHERE email = ? AND is_deleted = 0
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn create_user(&self, data: UserData, password_hash: String) -> Result<User, ApiError> {
        let user = User {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            role: data.role,
            image: data.image,
            status: data.status,
            password_hash,
            created_at: Utc::now(),
            is_deleted: false,
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, role, image, status,
                               created_at, is_deleted)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(&user.image)
        .bind(&user.status)
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    /// update_user
    ///
    /// Partial update via COALESCE. The password hash is only overwritten when a
    /// new one was computed; an omitted password leaves the stored hash untouched.
    async fn update_user(
        &self,
        id: Uuid,
        update: UserUpdate,
        password_hash: Option<String>,
    ) -> Result<Option<User>, ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = COALESCE(?, name),
                email = COALESCE(?, email),
                role = COALESCE(?, role),
                image = COALESCE(?, image),
                status = COALESCE(?, status),
                password_hash = COALESCE(?, password_hash)
            WHERE id = ? AND is_deleted = 0
            "#,
        )
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.role)
        .bind(&update.image)
        .bind(&update.status)
        .bind(&password_hash)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_user(id).await
    }

    async fn soft_delete_user(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = sqlx::query("UPDATE users SET is_deleted = 1 WHERE id = ? AND is_deleted = 0")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
