//! TaskStore port - canonical storage for task records.
//!
//! The store is the single shared mutable resource of the orchestrator: the
//! lifecycle manager is the only writer of task state, the query service is
//! read-only. A `put` that has returned is visible to any later `get` or
//! `list` (no eventual consistency).
//!
//! Listing is deliberately unordered: sorting and paging belong to the
//! query layer so the store stays storage-agnostic.

use async_trait::async_trait;

use crate::domain::{HarvestError, ScrapeTask, TaskId};

/// Durable, uniquely-keyed storage of `ScrapeTask` records.
///
/// Only per-id atomicity is required; puts to different ids never conflict.
/// Every method fails only with `HarvestError::StorageUnavailable`.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert or overwrite by id. Idempotent.
    async fn put(&self, task: &ScrapeTask) -> Result<(), HarvestError>;

    /// Point lookup; absent is not an error.
    async fn get(&self, id: &TaskId) -> Result<Option<ScrapeTask>, HarvestError>;

    /// All tasks, in no particular order.
    async fn list(&self) -> Result<Vec<ScrapeTask>, HarvestError>;

    /// Returns whether a record existed and was removed.
    async fn delete(&self, id: &TaskId) -> Result<bool, HarvestError>;
}
