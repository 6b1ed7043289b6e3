//! Scrape task record and status state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TaskId;
use super::request::ScrapeRequest;

/// Task status (snake_case on the wire).
///
/// State transitions:
/// - Pending -> Running -> Completed
/// - Pending -> Running -> Failed
///
/// Completed/Failed are terminal: the lifecycle manager never re-enters
/// dispatch for a task in either state. Manual overrides may still rewrite
/// a terminal record, but that is an out-of-band correction, not a
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created, dispatch not started yet.
    Pending,

    /// Dispatch to the backend is in flight.
    Running,

    /// Backend returned a success payload.
    Completed,

    /// Backend rejected the request, or it never got there.
    Failed,
}

impl TaskStatus {
    /// Is this a terminal state (no further automatic transition)?
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }
}

/// Manual override payload for the out-of-band update path.
///
/// Only `status` drives a change; `result`/`error` are attached when the
/// forced status makes them meaningful.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskUpdate {
    pub status: Option<TaskStatus>,
    pub result: Option<serde_json::Value>,
    pub error: Option<String>,
}

/// One unit of cross-platform scraping work.
///
/// The task store owns the canonical copy; the lifecycle manager mutates it
/// only through the `mark_*` methods below and writes back before anyone
/// else can observe the change. Every mutation stamps `updated_at`;
/// `created_at` and `total_targets` are frozen at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeTask {
    pub id: TaskId,

    /// Immutable snapshot of the originating request.
    pub request: ScrapeRequest,

    pub status: TaskStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Set exactly once, when the task finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Backend success payload, stored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,

    /// Human-readable failure cause; always present on `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Handle counts summed across all platform lists at creation.
    pub total_targets: usize,
}

impl ScrapeTask {
    /// New pending task.
    pub fn new(
        id: TaskId,
        request: ScrapeRequest,
        total_targets: usize,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            request,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
            completed_at: None,
            result: None,
            error: None,
            total_targets,
        }
    }

    /// Dispatch has begun.
    pub fn mark_running(&mut self, now: DateTime<Utc>) {
        self.status = TaskStatus::Running;
        self.updated_at = now;
    }

    /// Backend succeeded: attach the payload and finish.
    pub fn mark_completed(&mut self, result: serde_json::Value, now: DateTime<Utc>) {
        self.status = TaskStatus::Completed;
        self.result = Some(result);
        self.completed_at = Some(now);
        self.updated_at = now;
    }

    /// Backend (or the network) failed: record the cause. No retry follows;
    /// a failed dispatch is resubmitted by the caller as a new task.
    pub fn mark_failed(&mut self, error: String, now: DateTime<Utc>) {
        self.status = TaskStatus::Failed;
        self.error = Some(error);
        self.updated_at = now;
    }

    /// Apply a manual override.
    ///
    /// No-op unless `update.status` is present. Entering a terminal state
    /// stamps `completed_at` (once). This path can race with the automatic
    /// advance on the same id; callers are expected not to override a task
    /// that is still being dispatched.
    pub fn apply_override(&mut self, update: &TaskUpdate, now: DateTime<Utc>) {
        let Some(status) = update.status else {
            return;
        };

        self.status = status;
        self.updated_at = now;

        if status == TaskStatus::Completed
            && let Some(result) = &update.result
        {
            self.result = Some(result.clone());
        }
        if status == TaskStatus::Failed
            && let Some(error) = &update.error
        {
            self.error = Some(error.clone());
        }
        if status.is_terminal() && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use ulid::Ulid;

    fn t(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, secs).unwrap()
    }

    fn task() -> ScrapeTask {
        let request = ScrapeRequest {
            tiktok_users: vec!["alice".to_string(), "bob".to_string()],
            instagram_users: vec![],
            youtube_users: vec!["https://youtube.com/@chan_a".to_string()],
            max_items_per_user: 5,
        };
        ScrapeTask::new(TaskId::from_ulid(Ulid::new()), request, 3, t(0))
    }

    #[test]
    fn new_task_is_pending() {
        let task = task();
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.total_targets, 3);
        assert_eq!(task.created_at, task.updated_at);
        assert!(task.completed_at.is_none());
        assert!(task.result.is_none());
        assert!(task.error.is_none());
    }

    #[test]
    fn running_touches_updated_at_only() {
        let mut task = task();
        task.mark_running(t(1));

        assert_eq!(task.status, TaskStatus::Running);
        assert_eq!(task.updated_at, t(1));
        assert_eq!(task.created_at, t(0));
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn completed_attaches_result_and_completed_at() {
        let mut task = task();
        task.mark_running(t(1));
        task.mark_completed(serde_json::json!({"ok": true}), t(9));

        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.completed_at, Some(t(9)));
        assert!(task.completed_at.unwrap() >= task.created_at);
        assert_eq!(task.result, Some(serde_json::json!({"ok": true})));
    }

    #[test]
    fn failed_records_cause_without_completed_at() {
        let mut task = task();
        task.mark_running(t(1));
        task.mark_failed("backend service error (500): boom".to_string(), t(2));

        assert_eq!(task.status, TaskStatus::Failed);
        assert!(task.error.as_deref().unwrap().contains("500"));
        assert!(task.completed_at.is_none());
    }

    #[rstest]
    #[case::pending(TaskStatus::Pending, false)]
    #[case::running(TaskStatus::Running, false)]
    #[case::completed(TaskStatus::Completed, true)]
    #[case::failed(TaskStatus::Failed, true)]
    fn terminal_states(#[case] status: TaskStatus, #[case] terminal: bool) {
        assert_eq!(status.is_terminal(), terminal);
    }

    #[test]
    fn override_without_status_is_a_noop() {
        let mut task = task();
        let before = task.clone();

        task.apply_override(
            &TaskUpdate {
                status: None,
                result: Some(serde_json::json!({"ignored": true})),
                error: Some("ignored".to_string()),
            },
            t(5),
        );

        assert_eq!(task, before);
    }

    #[test]
    fn override_to_completed_attaches_result() {
        let mut task = task();
        task.apply_override(
            &TaskUpdate {
                status: Some(TaskStatus::Completed),
                result: Some(serde_json::json!({"manual": true})),
                error: None,
            },
            t(7),
        );

        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.result, Some(serde_json::json!({"manual": true})));
        assert_eq!(task.completed_at, Some(t(7)));
    }

    #[test]
    fn override_to_failed_stamps_completed_at() {
        let mut task = task();
        task.apply_override(
            &TaskUpdate {
                status: Some(TaskStatus::Failed),
                result: None,
                error: Some("operator abort".to_string()),
            },
            t(3),
        );

        assert_eq!(task.status, TaskStatus::Failed);
        assert_eq!(task.error.as_deref(), Some("operator abort"));
        // Out-of-band corrections are the final word on the task.
        assert_eq!(task.completed_at, Some(t(3)));
    }

    #[test]
    fn serde_roundtrip_preserves_record() {
        let mut task = task();
        task.mark_running(t(1));
        task.mark_completed(serde_json::json!({"posts": 15}), t(4));

        let s = serde_json::to_string(&task).unwrap();
        let back: ScrapeTask = serde_json::from_str(&s).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn pending_task_serializes_without_optional_fields() {
        let v = serde_json::to_value(task()).unwrap();
        let obj = v.as_object().unwrap();
        assert!(!obj.contains_key("completed_at"));
        assert!(!obj.contains_key("result"));
        assert!(!obj.contains_key("error"));
        assert_eq!(v["status"], "pending");
    }
}
