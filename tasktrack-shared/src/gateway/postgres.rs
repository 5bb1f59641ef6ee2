/// PostgreSQL task gateway
///
/// Wraps the `Task` model queries and turns "no row" outcomes into
/// [`GatewayError::NotFound`]. Updates and deletes decide existence from the
/// statement itself (`RETURNING` / rows affected), never from a prior read.

use super::{GatewayError, GatewayResult, TaskGateway};
use crate::db::pool;
use crate::models::task::{NewTask, Task, TaskPatch};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

/// Task gateway backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgTaskGateway {
    pool: PgPool,
}

impl PgTaskGateway {
    /// Creates a gateway over an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TaskGateway for PgTaskGateway {
    async fn list_all(&self) -> GatewayResult<Vec<Task>> {
        let tasks = Task::list(&self.pool).await?;
        debug!(count = tasks.len(), "Listed tasks");
        Ok(tasks)
    }

    async fn get_by_id(&self, id: i32) -> GatewayResult<Task> {
        Task::find_by_id(&self.pool, id)
            .await?
            .ok_or(GatewayError::NotFound(id))
    }

    async fn create(&self, data: NewTask) -> GatewayResult<Task> {
        let task = Task::create(&self.pool, data).await?;
        debug!(task_id = task.id, "Created task");
        Ok(task)
    }

    async fn update_by_id(&self, id: i32, patch: TaskPatch) -> GatewayResult<Task> {
        let task = Task::update(&self.pool, id, patch)
            .await?
            .ok_or(GatewayError::NotFound(id))?;
        debug!(task_id = id, "Updated task");
        Ok(task)
    }

    async fn delete_by_id(&self, id: i32) -> GatewayResult<()> {
        if !Task::delete(&self.pool, id).await? {
            return Err(GatewayError::NotFound(id));
        }
        debug!(task_id = id, "Deleted task");
        Ok(())
    }

    async fn health_check(&self) -> GatewayResult<()> {
        pool::health_check(&self.pool).await?;
        Ok(())
    }
}
