/// Task CRUD endpoints
///
/// # Endpoints
///
/// - `GET /tasks` - List all tasks
/// - `GET /tasks/:id` - Get a task
/// - `POST /tasks` - Create a task
/// - `PATCH /tasks/:id` - Partially update a task
/// - `DELETE /tasks/:id` - Delete a task
///
/// Handlers stay thin: they extract, call the gateway, and let `ApiError`
/// translate failures.

use crate::{
    app::AppState,
    error::ApiResult,
    extract::{TaskId, ValidatedJson},
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tasktrack_shared::models::task::{NewTask, Task, TaskPatch};

/// Message returned after a successful delete
pub const DELETED_MESSAGE: &str = "Task deleted successfully";

/// Delete task response
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    /// Confirmation message
    pub message: String,
}

/// List tasks
///
/// # Endpoint
///
/// ```text
/// GET /tasks
/// ```
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "title": "Buy milk", "description": null, "completed": false }
/// ]
/// ```
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.tasks.list_all().await?;
    Ok(Json(tasks))
}

/// Get a task by ID
///
/// # Errors
///
/// - `400 Bad Request`: ID is not an integer
/// - `404 Not Found`: No task with this ID
pub async fn get_task(State(state): State<AppState>, id: TaskId) -> ApiResult<Json<Task>> {
    let task = state.tasks.get_by_id(id.0).await?;
    Ok(Json(task))
}

/// Create a task
///
/// # Endpoint
///
/// ```text
/// POST /tasks
/// Content-Type: application/json
///
/// { "title": "Buy milk" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": 1, "title": "Buy milk", "description": null, "completed": false }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing title, wrong types, unknown fields, or title
///   outside 1-255 characters
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewTask>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = state.tasks.create(input).await?;

    tracing::info!(task_id = task.id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Partially update a task
///
/// Only fields present in the body change. `"description": null` clears the
/// description; omitting it leaves it as is.
///
/// # Errors
///
/// - `400 Bad Request`: Invalid ID or body
/// - `404 Not Found`: No task with this ID
pub async fn update_task(
    State(state): State<AppState>,
    id: TaskId,
    ValidatedJson(patch): ValidatedJson<TaskPatch>,
) -> ApiResult<Json<Task>> {
    let task = state.tasks.update_by_id(id.0, patch).await?;

    tracing::info!(task_id = task.id, completed = task.completed, "Task updated");

    Ok(Json(task))
}

/// Delete a task
///
/// # Response
///
/// ```json
/// { "message": "Task deleted successfully" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Invalid ID
/// - `404 Not Found`: No task with this ID
pub async fn delete_task(
    State(state): State<AppState>,
    id: TaskId,
) -> ApiResult<Json<DeleteTaskResponse>> {
    state.tasks.delete_by_id(id.0).await?;

    tracing::info!(task_id = id.0, "Task deleted");

    Ok(Json(DeleteTaskResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}
