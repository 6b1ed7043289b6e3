//! Domain model (ids, request, plan, task record, errors).
//!
//! Everything here is pure data plus the task state machine; no I/O. The
//! seams to the outside world live in `ports`.

pub mod errors;
pub mod ids;
pub mod plan;
pub mod platform;
pub mod request;
pub mod task;

pub use errors::HarvestError;
pub use ids::{ParseTaskIdError, TaskId};
pub use plan::{ChannelPlan, PlanConfig, ScrapePlan, UserPlan};
pub use platform::Platform;
pub use request::ScrapeRequest;
pub use task::{ScrapeTask, TaskStatus, TaskUpdate};
