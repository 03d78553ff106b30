//! Project endpoints
//!
//! # Endpoints
//!
//! - `POST /projects/` - Create project
//! - `GET /projects/` - List projects, optionally filtered by name
//! - `GET /projects/:id` - Get project
//! - `PUT /projects/:id` - Replace project
//! - `DELETE /projects/:id` - Delete project
//!
//! Updates are full overwrites: a description left out of a `PUT` body is
//! cleared, not preserved.

use super::MessageResponse;
use crate::{
    app::AppState,
    error::{is_foreign_key_violation, ApiError, ApiResult},
    extract::{ApiJson, ApiPath, ApiQuery},
};
use axum::{extract::State, Json};
use serde::Deserialize;
use taskboard_shared::models::project::{Project, ProjectInput};
use tracing::{debug, info};
use validator::Validate;

/// Create / replace project request
#[derive(Debug, Deserialize, Validate)]
pub struct ProjectRequest {
    /// Project name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Optional description
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default)]
    pub description: Option<String>,
}

impl From<ProjectRequest> for ProjectInput {
    fn from(req: ProjectRequest) -> Self {
        ProjectInput {
            name: req.name,
            description: req.description,
        }
    }
}

/// Query parameters for listing projects
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    /// Keyword to filter projects by name
    pub local_kw: Option<String>,
}

/// Create project
///
/// # Endpoint
///
/// ```text
/// POST /projects/
/// Content-Type: application/json
///
/// { "name": "Alpha", "description": "first" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "name": "Alpha", "description": "first" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed JSON
/// - `422 Unprocessable Entity`: Missing or invalid fields
/// - `500 Internal Server Error`: Server error
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProjectRequest>,
) -> ApiResult<Json<Project>> {
    req.validate()?;

    let project = Project::create(&state.db, req.into()).await?;

    info!(project_id = project.id, "Project created");
    Ok(Json(project))
}

/// List projects
///
/// `GET /projects/?local_kw=alp` returns only projects whose name contains
/// `alp`. An empty keyword is the same as no keyword.
pub async fn list_projects(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListProjectsQuery>,
) -> ApiResult<Json<Vec<Project>>> {
    let keyword = query.local_kw.as_deref().filter(|kw| !kw.is_empty());

    let projects = Project::list(&state.db, keyword).await?;

    debug!(count = projects.len(), keyword = ?keyword, "Listed projects");
    Ok(Json(projects))
}

/// Get project
///
/// # Errors
///
/// - `404 Not Found`: Project not found
pub async fn get_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Project>> {
    let project = Project::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    Ok(Json(project))
}

/// Replace project
///
/// Overwrites name and description.
///
/// # Errors
///
/// - `404 Not Found`: Project not found
/// - `422 Unprocessable Entity`: Missing or invalid fields
pub async fn update_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<ProjectRequest>,
) -> ApiResult<Json<Project>> {
    req.validate()?;

    let project = Project::update(&state.db, id, req.into())
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    info!(project_id = project.id, "Project updated");
    Ok(Json(project))
}

/// Delete project
///
/// # Response
///
/// ```json
/// { "message": "Project deleted successfully" }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Project not found
/// - `409 Conflict`: Tasks still belong to the project
pub async fn delete_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = Project::delete(&state.db, id).await.map_err(|err| {
        if is_foreign_key_violation(&err) {
            ApiError::Conflict("Project still has tasks".to_string())
        } else {
            err.into()
        }
    })?;

    if !deleted {
        return Err(ApiError::NotFound("Project not found".to_string()));
    }

    info!(project_id = id, "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
