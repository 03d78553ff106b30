//! Database layer for Taskboard
//!
//! This module provides connection pooling and schema bootstrap.
//!
//! # Modules
//!
//! - `pool`: Connection pool management with health checks
//! - `schema`: Idempotent table creation for PostgreSQL and SQLite
//! - Models are in the `models` module at crate root level
//!
//! # Example
//!
//! ```no_run
//! use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
//! use taskboard_shared::db::schema::{ensure_schema, Backend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = std::env::var("DATABASE_URL")?;
//!     let backend = Backend::from_url(&url)?;
//!
//!     let pool = create_pool(DatabaseConfig {
//!         url,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//!     ensure_schema(&pool, backend).await?;
//!     Ok(())
//! }
//! ```

pub mod pool;
pub mod schema;
