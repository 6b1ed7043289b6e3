//! Read-time projection of task records.
//!
//! `TaskView` is what list callers see: the raw record plus a synthesized
//! per-platform breakdown. Computed on every query, never persisted, never
//! written back.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Platform, ScrapePlan, ScrapeTask, TaskId, TaskStatus};

/// Platform-level status in the projection.
///
/// A platform that was never requested reports `not_requested`; otherwise
/// it mirrors the task status (the backend processes all platforms in one
/// call, so they finish together).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformStatus {
    NotRequested,
    Pending,
    Running,
    Completed,
    Failed,
}

impl PlatformStatus {
    fn project(requested: bool, status: TaskStatus) -> Self {
        if !requested {
            return PlatformStatus::NotRequested;
        }
        match status {
            TaskStatus::Pending => PlatformStatus::Pending,
            TaskStatus::Running => PlatformStatus::Running,
            TaskStatus::Completed => PlatformStatus::Completed,
            TaskStatus::Failed => PlatformStatus::Failed,
        }
    }
}

/// Per-platform result summary, synthesized for completed tasks from the
/// request shape (handle count x per-user cap). The backend's own payload
/// stays verbatim on the task record; this summary is the uniform view of
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformResults {
    pub success: bool,
    pub posts_saved: usize,
    pub error_message: Option<String>,
    pub posts_scraped: usize,
    pub profiles_saved: usize,
    pub processed_items: Vec<String>,
    pub snapshots_saved: usize,
    pub profiles_scraped: usize,
}

impl PlatformResults {
    fn synthesize(handles: &[String], max_items: u32) -> Self {
        let profiles = handles.len();
        let posts = profiles * max_items as usize;
        Self {
            success: true,
            posts_saved: posts,
            error_message: None,
            posts_scraped: posts,
            profiles_saved: profiles,
            processed_items: handles.to_vec(),
            // One profile snapshot per handle on top of its posts.
            snapshots_saved: profiles * (max_items as usize + 1),
            profiles_scraped: profiles,
        }
    }
}

/// The formatted task, one list item.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    pub task_id: TaskId,
    pub task_name: String,
    pub task_description: String,
    pub status: TaskStatus,

    /// The outbound request shape, reconstructed for display.
    pub request_params: ScrapePlan,

    pub total_platforms: usize,
    pub completed_platforms: usize,
    pub failed_platforms: usize,

    pub tiktok_status: PlatformStatus,
    pub instagram_status: PlatformStatus,
    pub youtube_status: PlatformStatus,

    pub tiktok_results: Option<PlatformResults>,
    pub instagram_results: Option<PlatformResults>,
    pub youtube_results: Option<PlatformResults>,

    pub total_profiles_scraped: usize,
    pub total_posts_scraped: usize,
    pub total_profiles_saved: usize,
    pub total_posts_saved: usize,
    pub total_snapshots_saved: usize,

    pub created_time: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_time: DateTime<Utc>,
    pub duration_seconds: Option<i64>,

    pub error_message: Option<String>,
    pub error_details: Option<String>,

    pub progress_percentage: u8,
    pub success_rate: u8,
}

impl TaskView {
    /// Project one task record.
    pub fn project(task: &ScrapeTask) -> Self {
        let request = &task.request;
        let status = task.status;
        let completed = status == TaskStatus::Completed;
        let platform_count = request.platform_count();
        let max_items = request.max_items_per_user as usize;

        let platform_status =
            |platform: Platform| PlatformStatus::project(request.is_requested(platform), status);
        let platform_results = |platform: Platform| -> Option<PlatformResults> {
            (completed && request.is_requested(platform)).then(|| {
                PlatformResults::synthesize(
                    request.handles_for(platform),
                    request.max_items_per_user,
                )
            })
        };

        Self {
            task_id: task.id,
            task_name: format!("Scraping task - {}", request.platform_label()),
            task_description: format!("Scrape across {platform_count} platform(s)"),
            status,

            request_params: ScrapePlan::from_request(request),

            total_platforms: platform_count,
            completed_platforms: if completed { platform_count } else { 0 },
            failed_platforms: if status == TaskStatus::Failed {
                platform_count
            } else {
                0
            },

            tiktok_status: platform_status(Platform::Tiktok),
            instagram_status: platform_status(Platform::Instagram),
            youtube_status: platform_status(Platform::Youtube),

            tiktok_results: platform_results(Platform::Tiktok),
            instagram_results: platform_results(Platform::Instagram),
            youtube_results: platform_results(Platform::Youtube),

            total_profiles_scraped: task.total_targets,
            total_posts_scraped: if completed {
                task.total_targets * max_items
            } else {
                0
            },
            total_profiles_saved: if completed { task.total_targets } else { 0 },
            total_posts_saved: if completed {
                task.total_targets * max_items
            } else {
                0
            },
            total_snapshots_saved: if completed {
                task.total_targets * (max_items + 1)
            } else {
                0
            },

            created_time: task.created_at,
            started_at: (status != TaskStatus::Pending).then_some(task.updated_at),
            completed_at: task.completed_at,
            updated_time: task.updated_at,
            duration_seconds: task
                .completed_at
                .map(|done| (done - task.created_at).num_seconds()),

            error_message: task.error.clone(),
            error_details: None,

            progress_percentage: match status {
                TaskStatus::Completed => 100,
                TaskStatus::Running => 50,
                TaskStatus::Pending | TaskStatus::Failed => 0,
            },
            success_rate: if status == TaskStatus::Failed { 0 } else { 100 },
        }
    }
}
