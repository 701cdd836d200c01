//! SQLite bootstrap: connection pool construction and embedded migrations.
//!
//! The pool built here is the only shared mutable resource in the process. It is
//! constructed once at startup and handed to the repository (dependency
//! injection), never exposed as a module-level singleton.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
///
/// Timestamps are stored as RFC 3339 TEXT; list-valued fields (content sections,
/// focus areas) as JSON TEXT; booleans as INTEGER 0/1.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL,
            image TEXT,
            status TEXT NOT NULL DEFAULT 'ACTIVE',
            created_at TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            slug TEXT,
            excerpt TEXT,
            content_sections TEXT NOT NULL DEFAULT '[]',
            featured_image TEXT,
            status TEXT NOT NULL DEFAULT 'DRAFT',
            published_at TEXT,
            author_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            summary TEXT,
            description TEXT NOT NULL,
            location TEXT,
            category TEXT,
            focus_areas TEXT NOT NULL DEFAULT '[]',
            status TEXT NOT NULL DEFAULT 'DRAFT',
            cover_image TEXT,
            start_date TEXT,
            end_date TEXT,
            created_at TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS partners (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            image TEXT,
            url TEXT,
            created_at TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS team_members (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            image TEXT,
            member_type TEXT NOT NULL DEFAULT 'TEAM',
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes for the hot paths: list queries filter on is_deleted and order by
    // created_at; login looks up by email. One statement per call, sqlite
    // prepared statements do not batch.
    for ddl in [
        "CREATE INDEX IF NOT EXISTS idx_posts_created_at ON posts(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_projects_created_at ON projects(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_partners_created_at ON partners(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_team_members_created_at ON team_members(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)",
    ] {
        sqlx::query(ddl).execute(pool).await?;
    }

    Ok(())
}
