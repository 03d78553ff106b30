//! API route handlers
//!
//! This module contains all route handlers organized by resource:
//!
//! - `root`: Welcome message
//! - `health`: Health check endpoint
//! - `projects`: Project CRUD endpoints
//! - `tasks`: Task CRUD endpoints

use serde::{Deserialize, Serialize};

pub mod health;
pub mod projects;
pub mod root;
pub mod tasks;

/// Plain message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
