//! Schema bootstrap
//!
//! Creates the `projects` and `tasks` tables and their indexes at startup if
//! they are missing. Every statement is `IF NOT EXISTS`, so running it against
//! an initialized database is a no-op.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE projects (
//!     id BIGSERIAL PRIMARY KEY,
//!     name VARCHAR(255) NOT NULL,
//!     description VARCHAR(500)
//! );
//!
//! CREATE TABLE tasks (
//!     id BIGSERIAL PRIMARY KEY,
//!     name VARCHAR(255) NOT NULL,
//!     status VARCHAR(50) NOT NULL DEFAULT 'pending',
//!     project_id BIGINT NOT NULL REFERENCES projects(id)
//! );
//! ```
//!
//! The foreign key has no `ON DELETE` action: a project that still owns
//! tasks cannot be deleted.

use sqlx::AnyPool;
use tracing::{debug, info};

/// Errors raised while preparing the schema
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The URL scheme does not name a supported backend
    #[error("unsupported database URL scheme: {0}")]
    UnsupportedUrl(String),

    /// A DDL statement failed
    #[error("schema statement failed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Database backend, selected by URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Detects the backend from a connection URL
    ///
    /// # Example
    ///
    /// ```
    /// use taskboard_shared::db::schema::Backend;
    ///
    /// assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
    /// assert_eq!(Backend::from_url("postgres://localhost/db").unwrap(), Backend::Postgres);
    /// ```
    pub fn from_url(url: &str) -> Result<Self, SchemaError> {
        let scheme = url.split(':').next().unwrap_or_default();

        match scheme {
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            "sqlite" => Ok(Backend::Sqlite),
            _ => Err(SchemaError::UnsupportedUrl(scheme.to_string())),
        }
    }

    fn statements(&self) -> &'static [&'static str] {
        match self {
            Backend::Postgres => POSTGRES_SCHEMA,
            Backend::Sqlite => SQLITE_SCHEMA,
        }
    }
}

const POSTGRES_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        description VARCHAR(500)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_projects_name ON projects (name)",
    r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        status VARCHAR(50) NOT NULL DEFAULT 'pending',
        project_id BIGINT NOT NULL REFERENCES projects(id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_tasks_name ON tasks (name)",
    "CREATE INDEX IF NOT EXISTS ix_tasks_project_id ON tasks (project_id)",
];

const SQLITE_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_projects_name ON projects (name)",
    r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'pending',
        project_id INTEGER NOT NULL REFERENCES projects(id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_tasks_name ON tasks (name)",
    "CREATE INDEX IF NOT EXISTS ix_tasks_project_id ON tasks (project_id)",
];

/// Creates all tables and indexes that do not exist yet
///
/// # Errors
///
/// Returns `SchemaError::Database` if any statement fails; statements that
/// already ran are not rolled back.
pub async fn ensure_schema(pool: &AnyPool, backend: Backend) -> Result<(), SchemaError> {
    info!(?backend, "Ensuring database schema");

    for statement in backend.statements() {
        debug!(statement = statement.trim(), "Executing schema statement");
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema ready");
    Ok(())
}
