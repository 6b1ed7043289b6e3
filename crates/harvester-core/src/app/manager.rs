//! Task lifecycle manager.
//!
//! Owns the state machine pending -> running -> completed|failed and is the
//! only writer of task state. `create` persists the pending record and
//! returns immediately; a spawned advance walks the task to a terminal
//! state. Queries never wait on an in-flight advance.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    HarvestError, ScrapePlan, ScrapeRequest, ScrapeTask, TaskId, TaskStatus, TaskUpdate,
};
use crate::ports::{Clock, DispatchOutcome, Dispatcher, IdGenerator, TaskStore};

/// How long the advance waits before flipping pending -> running, so a
/// caller polling right after create can still observe `pending`. Cosmetic,
/// not a correctness requirement; tests run with zero.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(2);

/// What `create` hands back: the pending task plus a summary line.
#[derive(Debug, Clone)]
pub struct CreatedTask {
    pub task: ScrapeTask,
    pub message: String,
}

/// Coordinates the request builder, the store and the dispatcher.
pub struct TaskManager {
    store: Arc<dyn TaskStore>,
    dispatcher: Arc<dyn Dispatcher>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    grace_period: Duration,
}

impl TaskManager {
    pub fn new(
        store: Arc<dyn TaskStore>,
        dispatcher: Arc<dyn Dispatcher>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        grace_period: Duration,
    ) -> Self {
        Self {
            store,
            dispatcher,
            clock,
            ids,
            grace_period,
        }
    }

    /// Validate, persist a pending task, schedule its advance, return.
    ///
    /// Validation failures produce no store write. The returned task is
    /// always `pending`; poll the query service for progress.
    pub async fn create(&self, request: ScrapeRequest) -> Result<CreatedTask, HarvestError> {
        let plan = ScrapePlan::build(&request)?;

        let id = self.ids.next_task_id();
        let task = ScrapeTask::new(id, request, plan.total_targets(), self.clock.now());
        self.store.put(&task).await?;

        tracing::info!(task_id = %id, targets = task.total_targets, "scrape task created");

        // The advance runs as its own unit of work; the creation caller
        // never waits on the backend.
        let store = Arc::clone(&self.store);
        let dispatcher = Arc::clone(&self.dispatcher);
        let clock = Arc::clone(&self.clock);
        let grace_period = self.grace_period;
        tokio::spawn(async move {
            advance(store, dispatcher, clock, grace_period, id, plan).await;
        });

        let message = format!(
            "Scraping task created; will process {} influencer(s)",
            task.total_targets
        );
        Ok(CreatedTask { task, message })
    }

    /// Out-of-band correction: force status, attach result/error.
    ///
    /// Shares the persistence path with the automatic advance but not its
    /// ordering: an override racing an in-flight advance on the same id has
    /// no defined winner. Don't do that.
    pub async fn update(&self, id: &TaskId, update: TaskUpdate) -> Result<ScrapeTask, HarvestError> {
        let mut task = self
            .store
            .get(id)
            .await?
            .ok_or(HarvestError::NotFound(*id))?;

        task.apply_override(&update, self.clock.now());
        self.store.put(&task).await?;

        tracing::info!(task_id = %id, status = ?task.status, "scrape task updated manually");
        Ok(task)
    }

    /// Remove a task record entirely.
    pub async fn delete(&self, id: &TaskId) -> Result<(), HarvestError> {
        if self.store.delete(id).await? {
            tracing::info!(task_id = %id, "scrape task deleted");
            Ok(())
        } else {
            Err(HarvestError::NotFound(*id))
        }
    }
}

/// Walk one task from pending to a terminal state.
///
/// Every failure in here lands on the task record (or, for storage
/// failures, in the log with the last persisted state left intact);
/// nothing is thrown into the void.
async fn advance(
    store: Arc<dyn TaskStore>,
    dispatcher: Arc<dyn Dispatcher>,
    clock: Arc<dyn Clock>,
    grace_period: Duration,
    id: TaskId,
    plan: ScrapePlan,
) {
    if !grace_period.is_zero() {
        tokio::time::sleep(grace_period).await;
    }

    // Re-read: the task may have been deleted or manually finished while we
    // slept. Terminal tasks are never re-dispatched.
    let mut task = match store.get(&id).await {
        Ok(Some(task)) => task,
        Ok(None) => {
            tracing::warn!(task_id = %id, "task vanished before dispatch; skipping");
            return;
        }
        Err(e) => {
            tracing::error!(task_id = %id, error = %e, "could not load task for dispatch");
            return;
        }
    };
    if task.status != TaskStatus::Pending {
        tracing::warn!(
            task_id = %id,
            status = ?task.status,
            "task already advanced out of pending; skipping dispatch"
        );
        return;
    }

    task.mark_running(clock.now());
    if let Err(e) = store.put(&task).await {
        tracing::error!(task_id = %id, error = %e, "could not persist running state; aborting advance");
        return;
    }

    let outcome = dispatcher.dispatch(&plan).await;

    let now = clock.now();
    match outcome {
        DispatchOutcome::Success(result) => {
            task.mark_completed(result, now);
            tracing::info!(task_id = %id, "scrape task completed");
        }
        DispatchOutcome::BackendError { status, body } => {
            let cause = HarvestError::Backend { status, body }.to_string();
            tracing::error!(task_id = %id, status, "backend rejected scrape task");
            task.mark_failed(cause, now);
        }
        DispatchOutcome::TransportError(reason) => {
            tracing::error!(task_id = %id, reason = %reason, "backend unreachable");
            task.mark_failed(HarvestError::Transport(reason).to_string(), now);
        }
    }

    if let Err(e) = store.put(&task).await {
        // Last-known state stays in the store; the outcome is at least in
        // the log.
        tracing::error!(task_id = %id, error = %e, "could not persist terminal state");
    }
}
