//! Todo CRUD handlers.
//!
//! Each handler validates required input, issues exactly one repository
//! call, and maps the outcome to a fixed status code and JSON body. The
//! store is never reached when validation fails.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    handlers::AppError,
    models::{CreateTodo, UpdateTodo},
    state::AppState,
};

/// Create a todo record (POST /todos).
///
/// Writes unconditionally: an existing record with the same `id` is
/// overwritten silently.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) = payload
        .map_err(|e| AppError::Validation(format!("Failed to parse request body: {e}")))?;

    tracing::debug!(payload = ?payload, "Received create todo request");

    let todo = payload.into_todo().map_err(AppError::missing)?;

    state
        .todo_repo
        .put_todo(&todo)
        .await
        .map_err(|e| AppError::storage("Error creating todo", e))?;

    tracing::info!(todo_id = %todo.id, "Created todo");

    Ok(Json(json!({ "message": "Todo created successfully" })))
}

/// Get a todo record by id (GET /todos/{id}).
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let todo = state
        .todo_repo
        .get_todo(&id)
        .await
        .map_err(|e| AppError::storage("Error retrieving todo", e))?
        .ok_or(AppError::NotFound("Todo not found"))?;

    Ok(Json(json!({
        "message": "Todo retrieved successfully",
        "todo": todo,
    })))
}

/// Update the non-key fields of a todo record (PUT /todos/{id}).
///
/// Returns the full post-update record. Updating an `id` that does not
/// exist upserts it; see `TodoRepository::update_todo`.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) = payload
        .map_err(|e| AppError::Validation(format!("Failed to parse request body: {e}")))?;

    tracing::debug!(todo_id = %id, payload = ?payload, "Received update todo request");

    let patch = payload.into_patch().map_err(AppError::missing)?;

    let updated = state
        .todo_repo
        .update_todo(&id, &patch)
        .await
        .map_err(|e| AppError::storage("Error updating todo", e))?;

    tracing::info!(todo_id = %id, "Updated todo");

    Ok(Json(json!({
        "message": "Todo updated successfully",
        "updatedTodo": updated,
    })))
}

/// Delete a todo record by id (DELETE /todos/{id}).
///
/// Deletes unconditionally; an `id` that never existed still reports
/// success.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    tracing::debug!(todo_id = %id, "Received delete todo request");

    state
        .todo_repo
        .delete_todo(&id)
        .await
        .map_err(|e| AppError::storage("Error deleting todo", e))?;

    tracing::info!(todo_id = %id, "Deleted todo");

    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}

/// List every todo record (GET /todos).
///
/// Issues a single unbounded scan. An empty collection reports 404, which
/// existing callers depend on.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let todos = state
        .todo_repo
        .scan_todos()
        .await
        .map_err(|e| AppError::storage("Error retrieving todos", e))?;

    if todos.is_empty() {
        return Err(AppError::NotFound("No todos found"));
    }

    Ok(Json(json!({
        "message": "Todos retrieved successfully",
        "todos": todos,
    })))
}
