//! Dispatcher port - the call to the external scraping backend.
//!
//! One combined request per task: all platform sub-plans travel together
//! and the backend answers with one result or one error. The dispatcher
//! never touches the store; it reports its outcome to the lifecycle
//! manager, which is the sole writer.

use async_trait::async_trait;

use crate::domain::ScrapePlan;

/// Classified result of one backend call.
///
/// This is not a `Result`: all three arms are expected program states that
/// the lifecycle manager maps onto the task record, not bugs to bubble up.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// 2xx with a decodable body, passed through verbatim.
    Success(serde_json::Value),

    /// The backend answered with a failure status.
    BackendError { status: u16, body: String },

    /// The backend was never reached: connect failure, timeout, or an
    /// unreadable response.
    TransportError(String),
}

/// Performs the backend call and classifies the outcome.
///
/// Implementations bound the call with a hard timeout; once sent, the call
/// either resolves, errors, or times out - there is no mid-flight
/// cancellation.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, plan: &ScrapePlan) -> DispatchOutcome;
}
