//! Project model and database operations
//!
//! A project groups any number of tasks. Projects carry a name and an
//! optional free-text description.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE projects (
//!     id BIGSERIAL PRIMARY KEY,
//!     name VARCHAR(255) NOT NULL,
//!     description VARCHAR(500)
//! );
//! CREATE INDEX ix_projects_name ON projects (name);
//! ```
//!
//! # Example
//!
//! ```no_run
//! use taskboard_shared::models::project::{Project, ProjectInput};
//! use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(DatabaseConfig::default()).await?;
//!
//! let project = Project::create(&pool, ProjectInput {
//!     name: "Alpha".to_string(),
//!     description: Some("first".to_string()),
//! }).await?;
//!
//! let matching = Project::list(&pool, Some("Alp")).await?;
//! # Ok(())
//! # }
//! ```

use crate::models::task::Task;
use serde::{Deserialize, Serialize};
use sqlx::AnyPool;

/// Project model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Unique project ID
    pub id: i64,

    /// Project name
    pub name: String,

    /// Optional description
    pub description: Option<String>,
}

/// Input for creating or fully overwriting a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInput {
    /// Project name
    pub name: String,

    /// Description; `None` clears it on update
    pub description: Option<String>,
}

/// Escapes `LIKE` wildcards so the keyword only ever matches literally
fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl Project {
    /// Creates a new project
    ///
    /// # Returns
    ///
    /// The stored row, including its assigned ID
    pub async fn create(pool: &AnyPool, data: ProjectInput) -> Result<Self, sqlx::Error> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .fetch_one(pool)
        .await?;

        Ok(project)
    }

    /// Lists projects ordered by ID
    ///
    /// When `keyword` is given, only projects whose name contains it are
    /// returned. Case sensitivity follows the database: PostgreSQL `LIKE` is
    /// case-sensitive, SQLite `LIKE` is not (for ASCII).
    pub async fn list(pool: &AnyPool, keyword: Option<&str>) -> Result<Vec<Self>, sqlx::Error> {
        let projects = match keyword {
            Some(keyword) => {
                sqlx::query_as::<_, Project>(
                    r#"
                    SELECT id, name, description
                    FROM projects
                    WHERE name LIKE $1 ESCAPE '\'
                    ORDER BY id
                    "#,
                )
                .bind(like_pattern(keyword))
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Project>(
                    r#"
                    SELECT id, name, description
                    FROM projects
                    ORDER BY id
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(projects)
    }

    /// Finds a project by ID
    pub async fn find_by_id(pool: &AnyPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(project)
    }

    /// Overwrites every mutable field of a project
    ///
    /// Returns `None` if no project has this ID.
    pub async fn update(
        pool: &AnyPool,
        id: i64,
        data: ProjectInput,
    ) -> Result<Option<Self>, sqlx::Error> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET name = $2,
                description = $3
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.description)
        .fetch_optional(pool)
        .await?;

        Ok(project)
    }

    /// Deletes a project
    ///
    /// Returns `false` if no project has this ID. Fails with a foreign key
    /// violation while tasks still reference the project.
    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists the tasks belonging to this project
    pub async fn tasks(&self, pool: &AnyPool) -> Result<Vec<Task>, sqlx::Error> {
        Task::list_by_project(pool, self.id).await
    }
}
