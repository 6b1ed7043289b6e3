//! Error taxonomy for the orchestrator.
//!
//! Synchronous validation errors go back to the caller; everything that
//! happens during the asynchronous advance is recorded on the task record
//! itself, so the task is always the single source of truth for "what
//! happened". No variant triggers an automatic retry.

use thiserror::Error;

use super::TaskId;

#[derive(Debug, Error)]
pub enum HarvestError {
    /// Malformed or empty creation input. Rejected before anything is
    /// persisted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The task store could not complete an operation. In the advance path
    /// the task's last persisted state is left untouched.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The scraping backend answered with a non-success status.
    #[error("backend service error ({status}): {body}")]
    Backend { status: u16, body: String },

    /// The backend could not be reached, or the call timed out.
    #[error("transport error: {0}")]
    Transport(String),

    /// Update/delete referenced an unknown task id.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}
