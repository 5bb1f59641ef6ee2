/// Task model and database operations
///
/// This module provides the Task model, the only resource managed by Tasktrack,
/// along with the input types accepted for creation and partial updates.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id SERIAL PRIMARY KEY,
///     title VARCHAR(255) NOT NULL,
///     description TEXT,
///     completed BOOLEAN NOT NULL DEFAULT FALSE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::models::task::{NewTask, Task, TaskPatch};
/// use tasktrack_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, NewTask::titled("Buy milk")).await?;
///
/// let patch = TaskPatch {
///     completed: Some(true),
///     ..Default::default()
/// };
/// Task::update(&pool, task.id, patch).await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::PgPool;
use validator::{Validate, ValidationError};

/// Maximum title length, mirrors the `VARCHAR(255)` column
pub const MAX_TITLE_LENGTH: u64 = 255;

/// Task model as stored in the `tasks` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Datastore-assigned identifier, never changes after creation
    pub id: i32,

    /// Short human-readable title
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Whether the task has been completed
    pub completed: bool,
}

/// Input for creating a new task
///
/// `title` is required. `completed` defaults to `false` when omitted.
/// Unknown fields (including `id`) are rejected during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewTask {
    /// Task title
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be 1-255 characters"),
        custom(function = "no_nul")
    )]
    pub title: String,

    /// Optional description
    #[serde(default)]
    #[validate(custom(function = "no_nul"))]
    pub description: Option<String>,

    /// Initial completion flag
    #[serde(default)]
    pub completed: bool,
}

impl NewTask {
    /// Builds a task input with only a title set
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }
}

/// Input for partially updating a task
///
/// All fields are optional. Only present fields are written.
/// `description` uses `Some(None)` to clear the column, which is what an
/// explicit JSON `null` deserializes to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TaskPatch {
    /// New title (null is rejected)
    #[serde(default, deserialize_with = "present")]
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be 1-255 characters"),
        custom(function = "no_nul")
    )]
    pub title: Option<String>,

    /// New description (use Some(None) to clear)
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "no_nul"))]
    pub description: Option<Option<String>>,

    /// New completion flag (null is rejected)
    #[serde(default, deserialize_with = "present")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Returns true when the patch would not change any column
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    /// Applies the present fields to `task` in place
    ///
    /// `id` is never touched.
    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

/// Rejects text containing U+0000, which PostgreSQL cannot store in text columns
fn no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut error = ValidationError::new("nul_character");
        error.message = Some("Must not contain NUL characters".into());
        return Err(error);
    }
    Ok(())
}

/// Marks a field as present so that absent and `null` stay distinguishable.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl Task {
    /// Inserts a new task and returns it with its assigned ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(pool: &PgPool, data: NewTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, completed)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, completed
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.completed)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, completed
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists every task in insertion order
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, completed
            FROM tasks
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Applies a partial update
    ///
    /// Only present fields in `data` are written. An empty patch issues no
    /// write and returns the current row.
    ///
    /// # Returns
    ///
    /// The updated task if found, None if no task has this ID
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: TaskPatch,
    ) -> Result<Option<Self>, sqlx::Error> {
        if data.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        // Build dynamic update query based on which fields are present
        let mut assignments = Vec::with_capacity(3);
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            assignments.push(format!("title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            assignments.push(format!("description = ${}", bind_count));
        }
        if data.completed.is_some() {
            bind_count += 1;
            assignments.push(format!("completed = ${}", bind_count));
        }

        let query = format!(
            "UPDATE tasks SET {} WHERE id = $1 RETURNING id, title, description, completed",
            assignments.join(", ")
        );

        let mut q = sqlx::query_as::<_, Task>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(completed) = data.completed {
            q = q.bind(completed);
        }

        let task = q.fetch_optional(pool).await?;

        Ok(task)
    }

    /// Deletes a task
    ///
    /// # Returns
    ///
    /// True if a row was removed, false if no task had this ID
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts stored tasks
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
