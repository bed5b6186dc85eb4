use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{Task, TaskCreateRequest, TaskEditRequest, User},
};
use actix_web::{delete, get, patch, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Resolves the owning user for a task operation.
///
/// Every task handler goes through this first: a token can outlive its
/// account, so a missing row is a 404 before the task list is ever touched.
async fn load_owner(pool: &PgPool, user_id: i32) -> Result<User, AppError> {
    User::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}

/// Creates a new task for the authenticated user.
///
/// The new task gets a fresh id, a due date two days from now, and `pending`
/// status; the client controls only the title and description.
///
/// ## Request Body:
/// - `title`: The title of the task (required, non-empty).
/// - `description` (optional): A description of the task.
///
/// ## Responses:
/// - `201 Created`: Confirmation message. The created task's data is not echoed back.
/// - `400 Bad Request`: If the title is missing or empty.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the authenticated account no longer exists.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    task_data: web::Json<TaskCreateRequest>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    // Validate input
    task_data.validate()?;

    let mut user = load_owner(&pool, user_id.0).await?;

    let input = task_data.into_inner();
    user.tasks.0.push(Task::new(input.title, input.description));
    user.save_tasks(&pool).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Task created successfully"
    })))
}

/// Retrieves the authenticated user's task list in insertion order.
///
/// ## Responses:
/// - `200 OK`: A JSON array of tasks, or — when the list is empty — a
///   `{"message": "No tasks found, add a task!"}` object instead of `[]`.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the authenticated account no longer exists.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let user = load_owner(&pool, user_id.0).await?;

    if user.tasks.0.is_empty() {
        return Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "No tasks found, add a task!"
        })));
    }

    Ok(HttpResponse::Ok().json(&user.tasks.0))
}

/// Marks a task as completed.
///
/// This is the only guarded status transition: completing an
/// already-completed task is rejected, and there is no reversal.
#[patch("/{id}/complete")]
pub async fn complete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let mut user = load_owner(&pool, user_id.0).await?;

    let task = user
        .task_mut(task_id.into_inner())
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    if !task.complete() {
        return Err(AppError::BadRequest("Task already completed".into()));
    }

    user.save_tasks(&pool).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Task status updated"
    })))
}

/// Edits a task's fields.
///
/// Only fields present and non-empty in the body are overwritten; an explicit
/// empty string is indistinguishable from an absent field. Status writes here
/// bypass the completion guard that `complete_task` enforces.
#[put("/{id}")]
pub async fn edit_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    edit_data: web::Json<TaskEditRequest>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let mut user = load_owner(&pool, user_id.0).await?;

    let task = user
        .task_mut(task_id.into_inner())
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    task.apply_edit(edit_data.into_inner());

    user.save_tasks(&pool).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Task updated successfully"
    })))
}

/// Deletes a task permanently.
///
/// There is no soft delete; a second delete of the same id reports 404.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let mut user = load_owner(&pool, user_id.0).await?;

    if !user.remove_task(task_id.into_inner()) {
        return Err(AppError::NotFound("Task not found".into()));
    }

    user.save_tasks(&pool).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Task deleted successfully"
    })))
}
