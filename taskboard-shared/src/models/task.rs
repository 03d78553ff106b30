//! Task model and database operations
//!
//! Every task belongs to exactly one project through `project_id`. The
//! application never checks that the project exists; the foreign key does.
//!
//! `status` is a free-form label. There is no state machine and no fixed set
//! of values; new tasks start as [`DEFAULT_STATUS`] unless told otherwise.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id BIGSERIAL PRIMARY KEY,
//!     name VARCHAR(255) NOT NULL,
//!     status VARCHAR(50) NOT NULL DEFAULT 'pending',
//!     project_id BIGINT NOT NULL REFERENCES projects(id)
//! );
//! CREATE INDEX ix_tasks_name ON tasks (name);
//! CREATE INDEX ix_tasks_project_id ON tasks (project_id);
//! ```
//!
//! # Example
//!
//! ```no_run
//! use taskboard_shared::models::task::{Task, TaskInput, DEFAULT_STATUS};
//! use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(DatabaseConfig::default()).await?;
//!
//! let task = Task::create(&pool, TaskInput {
//!     name: "Write docs".to_string(),
//!     status: DEFAULT_STATUS.to_string(),
//!     project_id: 1,
//! }).await?;
//!
//! let owner = task.project(&pool).await?;
//! # Ok(())
//! # }
//! ```

use crate::models::project::Project;
use serde::{Deserialize, Serialize};
use sqlx::AnyPool;

/// Status given to tasks created without one
pub const DEFAULT_STATUS: &str = "pending";

/// Task model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID
    pub id: i64,

    /// Task name
    pub name: String,

    /// Free-form status label
    pub status: String,

    /// Owning project
    pub project_id: i64,
}

/// Input for creating or fully overwriting a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInput {
    /// Task name
    pub name: String,

    /// Status label
    pub status: String,

    /// Owning project
    pub project_id: i64,
}

impl Task {
    /// Creates a new task
    ///
    /// # Errors
    ///
    /// Returns a foreign key violation if `project_id` does not reference an
    /// existing project.
    pub async fn create(pool: &AnyPool, data: TaskInput) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (name, status, project_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, status, project_id
            "#,
        )
        .bind(data.name)
        .bind(data.status)
        .bind(data.project_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Lists every task ordered by ID
    pub async fn list(pool: &AnyPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, name, status, project_id
            FROM tasks
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Lists the tasks of one project
    ///
    /// An unknown project simply yields an empty list.
    pub async fn list_by_project(pool: &AnyPool, project_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, name, status, project_id
            FROM tasks
            WHERE project_id = $1
            ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Finds a task by ID
    pub async fn find_by_id(pool: &AnyPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, name, status, project_id
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Overwrites name, status and project of a task
    ///
    /// Returns `None` if no task has this ID.
    pub async fn update(
        pool: &AnyPool,
        id: i64,
        data: TaskInput,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET name = $2,
                status = $3,
                project_id = $4
            WHERE id = $1
            RETURNING id, name, status, project_id
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.status)
        .bind(data.project_id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a task
    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Loads the project this task belongs to
    pub async fn project(&self, pool: &AnyPool) -> Result<Option<Project>, sqlx::Error> {
        Project::find_by_id(pool, self.project_id).await
    }
}
