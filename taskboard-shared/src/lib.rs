//! # Taskboard Shared Library
//!
//! This crate contains the persistence layer used by the Taskboard API server:
//! connection pooling, schema bootstrap, and the project/task models.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and schema management
//! - `models`: Database models and their CRUD operations

pub mod db;
pub mod models;

/// Current version of the Taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
