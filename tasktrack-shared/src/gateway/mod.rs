/// Persistence gateway for tasks
///
/// The gateway is the typed contract between request handling and storage.
/// Absence is reported as [`GatewayError::NotFound`] rather than `Option`, so
/// callers pattern-match on a single `Result`.
///
/// # Implementations
///
/// - [`postgres::PgTaskGateway`]: PostgreSQL via `sqlx`
/// - [`memory::InMemoryTaskGateway`]: process-local map, used in tests
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use tasktrack_shared::gateway::{memory::InMemoryTaskGateway, GatewayError, TaskGateway};
/// use tasktrack_shared::models::task::NewTask;
///
/// # async fn example() -> Result<(), GatewayError> {
/// let gateway: Arc<dyn TaskGateway> = Arc::new(InMemoryTaskGateway::new());
///
/// let task = gateway.create(NewTask::titled("Buy milk")).await?;
/// assert_eq!(gateway.get_by_id(task.id).await?, task);
///
/// gateway.delete_by_id(task.id).await?;
/// assert!(matches!(
///     gateway.get_by_id(task.id).await,
///     Err(GatewayError::NotFound(_))
/// ));
/// # Ok(())
/// # }
/// ```

pub mod memory;
pub mod postgres;

use crate::models::task::{NewTask, Task, TaskPatch};
use async_trait::async_trait;
use thiserror::Error;

/// Gateway result type alias
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failures raised by a [`TaskGateway`]
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No task is stored under this ID
    #[error("Task with ID {0} not found")]
    NotFound(i32),

    /// The datastore rejected or failed the query
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl GatewayError {
    /// Returns true if this is a not-found failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound(_))
    }
}

/// Task persistence operations
///
/// Implementations hold no cache: every read goes to the backing store.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Returns every stored task ordered by insertion
    async fn list_all(&self) -> GatewayResult<Vec<Task>>;

    /// Returns the task with this ID
    ///
    /// # Errors
    ///
    /// - `GatewayError::NotFound` if no such task exists
    async fn get_by_id(&self, id: i32) -> GatewayResult<Task>;

    /// Persists a new task and returns it with its assigned ID
    async fn create(&self, data: NewTask) -> GatewayResult<Task>;

    /// Overwrites the fields present in `patch` and returns the full task
    ///
    /// # Errors
    ///
    /// - `GatewayError::NotFound` if no such task exists; nothing is written
    async fn update_by_id(&self, id: i32, patch: TaskPatch) -> GatewayResult<Task>;

    /// Permanently removes the task
    ///
    /// # Errors
    ///
    /// - `GatewayError::NotFound` if no row was affected
    async fn delete_by_id(&self, id: i32) -> GatewayResult<()>;

    /// Verifies the backing store is reachable
    async fn health_check(&self) -> GatewayResult<()>;
}
