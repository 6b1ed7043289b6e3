//! Scrape request: the creation payload.

use serde::{Deserialize, Serialize};

use super::platform::Platform;

/// Input to task creation: up to three platform handle lists plus a shared
/// per-user item cap.
///
/// Lists default to empty on the wire (callers usually send only the
/// platforms they care about). Duplicates are permitted; order is irrelevant
/// for scraping but preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub tiktok_users: Vec<String>,

    #[serde(default)]
    pub instagram_users: Vec<String>,

    /// Channel URLs, not bare usernames.
    #[serde(default)]
    pub youtube_users: Vec<String>,

    /// Applies uniformly across all requested platforms.
    pub max_items_per_user: u32,
}

impl ScrapeRequest {
    /// Handle list for one platform.
    pub fn handles_for(&self, platform: Platform) -> &[String] {
        match platform {
            Platform::Tiktok => &self.tiktok_users,
            Platform::Instagram => &self.instagram_users,
            Platform::Youtube => &self.youtube_users,
        }
    }

    /// Was this platform asked for at all? (empty list == not requested)
    pub fn is_requested(&self, platform: Platform) -> bool {
        !self.handles_for(platform).is_empty()
    }

    /// Platforms with a non-empty handle list, in canonical order.
    pub fn requested_platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.is_requested(*p))
            .collect()
    }

    /// Number of requested platforms.
    pub fn platform_count(&self) -> usize {
        self.requested_platforms().len()
    }

    /// Display label like "Tiktok+Youtube".
    pub fn platform_label(&self) -> String {
        self.requested_platforms()
            .iter()
            .map(|p| p.display_name())
            .collect::<Vec<_>>()
            .join("+")
    }

    /// Sum of handle counts across all three lists.
    pub fn total_targets(&self) -> usize {
        Platform::ALL
            .into_iter()
            .map(|p| self.handles_for(p).len())
            .sum()
    }
}
