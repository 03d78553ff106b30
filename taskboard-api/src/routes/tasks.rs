//! Task endpoints
//!
//! # Endpoints
//!
//! - `POST /tasks/` - Create task
//! - `GET /tasks/` - List all tasks
//! - `GET /projects/:id/tasks` - List tasks of one project
//! - `GET /tasks/:id` - Get task
//! - `PUT /tasks/:id` - Replace task
//! - `DELETE /tasks/:id` - Delete task
//!
//! The project referenced by `project_id` is not looked up beforehand; the
//! database foreign key decides, and a dangling reference comes back as
//! `409 Conflict`.

use super::MessageResponse;
use crate::{
    app::AppState,
    error::{is_foreign_key_violation, ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
};
use axum::{extract::State, Json};
use serde::Deserialize;
use taskboard_shared::models::task::{Task, TaskInput, DEFAULT_STATUS};
use tracing::info;
use validator::Validate;

/// Create / replace task request
#[derive(Debug, Deserialize, Validate)]
pub struct TaskRequest {
    /// Task name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Status label (defaults to "pending")
    #[validate(length(min = 1, max = 50, message = "Status must be 1-50 characters"))]
    #[serde(default = "default_status")]
    pub status: String,

    /// Owning project
    pub project_id: i64,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

impl From<TaskRequest> for TaskInput {
    fn from(req: TaskRequest) -> Self {
        TaskInput {
            name: req.name,
            status: req.status,
            project_id: req.project_id,
        }
    }
}

fn dangling_project(err: sqlx::Error, project_id: i64) -> ApiError {
    if is_foreign_key_violation(&err) {
        ApiError::Conflict(format!("Project {} does not exist", project_id))
    } else {
        err.into()
    }
}

/// Create task
///
/// # Endpoint
///
/// ```text
/// POST /tasks/
/// Content-Type: application/json
///
/// { "name": "T1", "project_id": 1 }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "name": "T1", "status": "pending", "project_id": 1 }
/// ```
///
/// # Errors
///
/// - `409 Conflict`: `project_id` references no project
/// - `422 Unprocessable Entity`: Missing or invalid fields
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TaskRequest>,
) -> ApiResult<Json<Task>> {
    req.validate()?;

    let project_id = req.project_id;
    let task = Task::create(&state.db, req.into())
        .await
        .map_err(|err| dangling_project(err, project_id))?;

    info!(task_id = task.id, project_id, "Task created");
    Ok(Json(task))
}

/// List all tasks
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;
    Ok(Json(tasks))
}

/// List tasks of a project
///
/// Returns an empty list for a project that does not exist.
pub async fn list_project_tasks(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i64>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_by_project(&state.db, project_id).await?;
    Ok(Json(tasks))
}

/// Get task
///
/// # Errors
///
/// - `404 Not Found`: Task not found
pub async fn get_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Replace task
///
/// Overwrites name, status and project. Takes the same body as create, so an
/// omitted status resets to "pending".
///
/// # Errors
///
/// - `404 Not Found`: Task not found
/// - `409 Conflict`: `project_id` references no project
/// - `422 Unprocessable Entity`: Missing or invalid fields
pub async fn update_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<TaskRequest>,
) -> ApiResult<Json<Task>> {
    req.validate()?;

    let project_id = req.project_id;
    let task = Task::update(&state.db, id, req.into())
        .await
        .map_err(|err| dangling_project(err, project_id))?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    info!(task_id = task.id, "Task updated");
    Ok(Json(task))
}

/// Delete task
///
/// # Response
///
/// ```json
/// { "message": "Task deleted successfully" }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Task not found
pub async fn delete_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    if !Task::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    info!(task_id = id, "Task deleted");
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
