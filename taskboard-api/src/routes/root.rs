//! Root endpoint
//!
//! ```text
//! GET /
//! ```
//!
//! ```json
//! { "message": "Welcome to the API!" }
//! ```

use super::MessageResponse;
use axum::Json;

pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the API!"))
}
