//! Orchestrator wiring.
//!
//! The store and the dispatcher are injected once at process start and
//! shared by the write side (manager) and the read side (query service).
//! Missing ports fail the build immediately rather than at first use.

use std::sync::Arc;
use std::time::Duration;

use crate::app::manager::{DEFAULT_GRACE_PERIOD, TaskManager};
use crate::app::query::TaskQueryService;
use crate::ports::{Clock, Dispatcher, IdGenerator, SystemClock, TaskStore, UlidGenerator};

/// Wiring-time errors.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no task store configured")]
    MissingStore,

    #[error("no dispatcher configured")]
    MissingDispatcher,
}

/// The assembled orchestrator: one manager, one query service, one shared
/// store underneath.
pub struct Orchestrator {
    pub manager: Arc<TaskManager>,
    pub query: TaskQueryService,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator").finish_non_exhaustive()
    }
}

/// Builder for `Orchestrator`.
///
/// ```ignore
/// let orchestrator = OrchestratorBuilder::new()
///     .store(InMemoryTaskStore::shared())
///     .dispatcher(Arc::new(HttpDispatcher::new(config)?))
///     .build()?;
/// ```
pub struct OrchestratorBuilder {
    store: Option<Arc<dyn TaskStore>>,
    dispatcher: Option<Arc<dyn Dispatcher>>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    grace_period: Duration,
}

impl OrchestratorBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            dispatcher: None,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UlidGenerator::new(SystemClock)),
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }

    pub fn store(mut self, store: Arc<dyn TaskStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn dispatcher(mut self, dispatcher: Arc<dyn Dispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Delay between create returning and the pending -> running flip.
    /// Zero disables the wait (used by tests).
    pub fn grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    pub fn build(self) -> Result<Orchestrator, BuildError> {
        let store = self.store.ok_or(BuildError::MissingStore)?;
        let dispatcher = self.dispatcher.ok_or(BuildError::MissingDispatcher)?;

        let manager = Arc::new(TaskManager::new(
            Arc::clone(&store),
            dispatcher,
            self.clock,
            self.ids,
            self.grace_period,
        ));
        let query = TaskQueryService::new(store);

        Ok(Orchestrator { manager, query })
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
