//! Database models for Taskboard
//!
//! This module contains all database models and their CRUD operations.
//!
//! # Models
//!
//! - `project`: Projects, the owning side of the relation
//! - `task`: Tasks, each referencing one project
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
//!     name: "Website relaunch".to_string(),
//!     description: None,
//! }).await?;
//!
//! let tasks = project.tasks(&pool).await?;
//! # Ok(())
//! # }
//! ```

pub mod project;
pub mod task;
