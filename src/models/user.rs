use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::task::Task;

/// A user account row, including the embedded task list.
///
/// The `tasks` column is a JSONB document owned exclusively by this user;
/// tasks are not addressable outside of it. The password is stored only as a
/// bcrypt hash, produced at the signup boundary before this row is inserted.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub tasks: Json<Vec<Task>>,
}

impl User {
    /// Looks a user up by id. Used by every task operation to resolve the
    /// owner from the authenticated identity.
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, tasks FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Looks a user up by their unique username. Used by signup (conflict
    /// check) and login (credential check).
    pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, tasks FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Inserts a new user with an empty task list and returns the assigned id.
    pub async fn insert(pool: &PgPool, username: &str, password_hash: &str) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO users (username, password_hash, tasks) VALUES ($1, $2, '[]'::jsonb) RETURNING id",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Writes the in-memory task list back as a whole-document save.
    ///
    /// Concurrent writers to the same user are last-writer-wins; there is no
    /// version check on the row.
    pub async fn save_tasks(&self, pool: &PgPool) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET tasks = $1 WHERE id = $2")
            .bind(Json(&self.tasks.0))
            .bind(self.id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Finds a task in this user's list by id.
    pub fn task_mut(&mut self, task_id: Uuid) -> Option<&mut Task> {
        self.tasks.0.iter_mut().find(|task| task.id == task_id)
    }

    /// Removes a task from this user's list. Returns `false` if no task with
    /// that id exists.
    pub fn remove_task(&mut self, task_id: Uuid) -> bool {
        let before = self.tasks.0.len();
        self.tasks.0.retain(|task| task.id != task_id);
        self.tasks.0.len() < before
    }
}
