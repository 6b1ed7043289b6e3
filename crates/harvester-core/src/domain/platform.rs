//! Supported scraping platforms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the platforms a scrape task can target.
///
/// Each platform contributes its own sub-plan to the outbound request
/// (TikTok/Instagram by username, YouTube by channel URL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Tiktok,
    Instagram,
    Youtube,
}

impl Platform {
    /// All platforms, in the order they appear in requests and views.
    pub const ALL: [Platform; 3] = [Platform::Tiktok, Platform::Instagram, Platform::Youtube];

    /// Wire name (lowercase), matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
        }
    }

    /// Capitalized name used in task labels ("Tiktok+Youtube").
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Tiktok => "Tiktok",
            Platform::Instagram => "Instagram",
            Platform::Youtube => "Youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
