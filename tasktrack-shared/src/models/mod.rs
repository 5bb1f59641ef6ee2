/// Database models for Tasktrack
///
/// This module contains the database models and their CRUD operations.
///
/// # Models
///
/// - `task`: The task resource plus its create/patch inputs
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::models::task::{NewTask, Task};
/// use tasktrack_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, NewTask::titled("Write report")).await?;
/// println!("Created task {}", task.id);
/// # Ok(())
/// # }
/// ```

pub mod task;
