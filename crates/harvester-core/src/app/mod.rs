//! Application layer: the services built on top of the ports.
//!
//! - **TaskManager**: task lifecycle (create, async advance, manual update,
//!   delete); the only writer of task state
//! - **TaskQueryService**: filter/sort/paginate + the `TaskView` projection;
//!   read-only
//! - **OrchestratorBuilder**: wiring + fail-fast validation

pub mod builder;
pub mod manager;
pub mod query;
pub mod view;

pub use self::builder::{BuildError, Orchestrator, OrchestratorBuilder};
pub use self::manager::{CreatedTask, DEFAULT_GRACE_PERIOD, TaskManager};
pub use self::query::{DEFAULT_PAGE_SIZE, TaskPage, TaskQuery, TaskQueryService};
pub use self::view::{PlatformResults, PlatformStatus, TaskView};
