//! In-memory task store.
//!
//! Reference implementation for development and tests. The map behind a
//! single async mutex is the source of truth; a durable store plugs in
//! behind the same `TaskStore` trait.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{HarvestError, ScrapeTask, TaskId};
use crate::ports::TaskStore;

/// Mutexed map keyed by task id.
#[derive(Default)]
pub struct InMemoryTaskStore {
    tasks: Mutex<HashMap<TaskId, ScrapeTask>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn put(&self, task: &ScrapeTask) -> Result<(), HarvestError> {
        let mut tasks = self.tasks.lock().await;
        tasks.insert(task.id, task.clone());
        Ok(())
    }

    async fn get(&self, id: &TaskId) -> Result<Option<ScrapeTask>, HarvestError> {
        let tasks = self.tasks.lock().await;
        Ok(tasks.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<ScrapeTask>, HarvestError> {
        let tasks = self.tasks.lock().await;
        Ok(tasks.values().cloned().collect())
    }

    async fn delete(&self, id: &TaskId) -> Result<bool, HarvestError> {
        let mut tasks = self.tasks.lock().await;
        Ok(tasks.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ScrapeRequest, TaskStatus};
    use chrono::{TimeZone, Utc};
    use ulid::Ulid;

    fn task(name: &str) -> ScrapeTask {
        let request = ScrapeRequest {
            tiktok_users: vec![name.to_string()],
            instagram_users: vec![],
            youtube_users: vec![],
            max_items_per_user: 3,
        };
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        ScrapeTask::new(TaskId::from_ulid(Ulid::new()), request, 1, now)
    }

    #[tokio::test]
    async fn put_then_get_roundtrips() {
        let store = InMemoryTaskStore::new();
        let task = task("alice");

        store.put(&task).await.unwrap();

        let loaded = store.get(&task.id).await.unwrap().unwrap();
        assert_eq!(loaded, task);
    }

    #[tokio::test]
    async fn get_missing_is_none_not_error() {
        let store = InMemoryTaskStore::new();
        let id = TaskId::from_ulid(Ulid::new());
        assert!(store.get(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_overwrites_by_id() {
        let store = InMemoryTaskStore::new();
        let mut task = task("alice");

        store.put(&task).await.unwrap();
        task.mark_running(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 1).unwrap());
        store.put(&task).await.unwrap();

        let loaded = store.get(&task.id).await.unwrap().unwrap();
        assert_eq!(loaded.status, TaskStatus::Running);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_returns_every_task() {
        let store = InMemoryTaskStore::new();
        let a = task("alice");
        let b = task("bob");

        store.put(&a).await.unwrap();
        store.put(&b).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|t| t.id == a.id));
        assert!(all.iter().any(|t| t.id == b.id));
    }

    #[tokio::test]
    async fn delete_reports_existence() {
        let store = InMemoryTaskStore::new();
        let task = task("alice");
        store.put(&task).await.unwrap();

        assert!(store.delete(&task.id).await.unwrap());
        assert!(!store.delete(&task.id).await.unwrap());
        assert!(store.get(&task.id).await.unwrap().is_none());
    }
}
