//! Task query service: filter, sort, paginate, project.
//!
//! Read-only. Queries go straight to the store and never wait on an
//! in-flight advance; two calls with no intervening writes return identical
//! pages.

use std::sync::Arc;

use serde::Serialize;

use crate::app::view::TaskView;
use crate::domain::{HarvestError, TaskStatus};
use crate::ports::TaskStore;

/// Matches what list callers typically ask for per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// List parameters. `page` is 1-based; zero values are clamped up to 1.
#[derive(Debug, Clone)]
pub struct TaskQuery {
    pub page: usize,
    pub page_size: usize,
    pub status: Option<TaskStatus>,
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            status: None,
        }
    }
}

/// One page of projected tasks. `total` counts the filtered set, not the
/// whole store.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPage {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub items: Vec<TaskView>,
}

/// Read side of the orchestrator.
pub struct TaskQueryService {
    store: Arc<dyn TaskStore>,
}

impl TaskQueryService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Filter by status, sort newest-first, slice the requested page.
    ///
    /// Ordering: `created_at` descending, ties broken by id descending -
    /// ids are monotonic, so the later-created task wins and the order is
    /// total. Out-of-range pages yield an empty `items` with `total` still
    /// accurate.
    pub async fn list(&self, query: &TaskQuery) -> Result<TaskPage, HarvestError> {
        let page = query.page.max(1);
        let page_size = query.page_size.max(1);

        let mut tasks = self.store.list().await?;
        if let Some(status) = query.status {
            tasks.retain(|t| t.status == status);
        }
        tasks.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = tasks.len();
        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let items = tasks
            .into_iter()
            .skip(offset)
            .take(page_size)
            .map(|t| TaskView::project(&t))
            .collect();

        Ok(TaskPage {
            page,
            page_size,
            total,
            items,
        })
    }
}
