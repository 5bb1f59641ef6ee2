/// In-memory task gateway
///
/// Keeps tasks in a `BTreeMap` keyed by ID so iteration order matches
/// insertion order, exactly like `ORDER BY id` on the `SERIAL` column. IDs
/// come from a monotonically increasing counter and are never reused, even
/// after deletes.

use super::{GatewayError, GatewayResult, TaskGateway};
use crate::models::task::{NewTask, Task, TaskPatch};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

/// Process-local task gateway
#[derive(Debug)]
pub struct InMemoryTaskGateway {
    tasks: RwLock<BTreeMap<i32, Task>>,
    next_id: AtomicI32,
}

impl Default for InMemoryTaskGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTaskGateway {
    /// Creates an empty gateway whose first task gets ID 1
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Number of stored tasks
    pub fn len(&self) -> usize {
        self.tasks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.read().is_empty()
    }
}

#[async_trait]
impl TaskGateway for InMemoryTaskGateway {
    async fn list_all(&self) -> GatewayResult<Vec<Task>> {
        Ok(self.tasks.read().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> GatewayResult<Task> {
        self.tasks
            .read()
            .get(&id)
            .cloned()
            .ok_or(GatewayError::NotFound(id))
    }

    async fn create(&self, data: NewTask) -> GatewayResult<Task> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let task = Task {
            id,
            title: data.title,
            description: data.description,
            completed: data.completed,
        };
        self.tasks.write().insert(id, task.clone());
        Ok(task)
    }

    async fn update_by_id(&self, id: i32, patch: TaskPatch) -> GatewayResult<Task> {
        let mut tasks = self.tasks.write();
        let task = tasks.get_mut(&id).ok_or(GatewayError::NotFound(id))?;
        patch.apply_to(task);
        Ok(task.clone())
    }

    async fn delete_by_id(&self, id: i32) -> GatewayResult<()> {
        self.tasks
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(GatewayError::NotFound(id))
    }

    async fn health_check(&self) -> GatewayResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get_returns_equal_task() {
        let gateway = InMemoryTaskGateway::new();
        let created = gateway.create(NewTask::titled("Buy milk")).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.description, None);
        assert!(!created.completed);
        assert_eq!(gateway.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found_without_mutation() {
        let gateway = InMemoryTaskGateway::new();
        gateway.create(NewTask::titled("keep")).await.unwrap();
        let before = gateway.list_all().await.unwrap();

        assert!(gateway.get_by_id(42).await.unwrap_err().is_not_found());
        let patch = TaskPatch {
            completed: Some(true),
            ..Default::default()
        };
        assert!(gateway.update_by_id(42, patch).await.unwrap_err().is_not_found());
        assert!(gateway.delete_by_id(42).await.unwrap_err().is_not_found());

        assert_eq!(gateway.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_keeps_absent_fields() {
        let gateway = InMemoryTaskGateway::new();
        let created = gateway
            .create(NewTask {
                title: "Write report".to_string(),
                description: Some("quarterly".to_string()),
                completed: false,
            })
            .await
            .unwrap();

        let updated = gateway
            .update_by_id(
                created.id,
                TaskPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_empty_patch_returns_current_task() {
        let gateway = InMemoryTaskGateway::new();
        let created = gateway.create(NewTask::titled("same")).await.unwrap();

        let updated = gateway
            .update_by_id(created.id, TaskPatch::default())
            .await
            .unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_delete_prevents_resurrection() {
        let gateway = InMemoryTaskGateway::new();
        let created = gateway.create(NewTask::titled("gone")).await.unwrap();

        gateway.delete_by_id(created.id).await.unwrap();
        assert!(gateway.get_by_id(created.id).await.unwrap_err().is_not_found());
        assert!(gateway.delete_by_id(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_counts_creates_minus_deletes() {
        let gateway = InMemoryTaskGateway::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            let task = gateway.create(NewTask::titled(format!("t{i}"))).await.unwrap();
            ids.push(task.id);
        }
        gateway.delete_by_id(ids[1]).await.unwrap();
        gateway.delete_by_id(ids[3]).await.unwrap();

        let listed = gateway.list_all().await.unwrap();
        assert_eq!(listed.len(), 3);
        let listed_ids: Vec<i32> = listed.iter().map(|t| t.id).collect();
        assert_eq!(listed_ids, vec![ids[0], ids[2], ids[4]]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let gateway = InMemoryTaskGateway::new();
        let first = gateway.create(NewTask::titled("a")).await.unwrap();
        gateway.delete_by_id(first.id).await.unwrap();
        let second = gateway.create(NewTask::titled("b")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(!gateway.is_empty());
        assert_eq!(gateway.len(), 1);
    }
}
