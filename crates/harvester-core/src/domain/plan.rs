//! Per-platform scrape plan: what actually goes out to the backend.
//!
//! `ScrapePlan::build` is the validation gate for task creation. The
//! serialized shape is the backend's contract: unrequested platforms are
//! explicit `null`s (the backend distinguishes "not requested" from
//! "requested with nothing to do"), TikTok/Instagram carry `usernames`,
//! YouTube carries `channel_urls`.

use serde::{Deserialize, Serialize};

use super::errors::HarvestError;
use super::platform::Platform;
use super::request::ScrapeRequest;

/// Backend-side processing switches, sent with every plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub save_to_db: bool,
    pub export_to_file: bool,
    pub save_snapshots: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            save_to_db: true,
            export_to_file: false,
            save_snapshots: true,
        }
    }
}

/// Sub-plan for a username-addressed platform (TikTok, Instagram).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPlan {
    pub usernames: Vec<String>,
    pub max_videos: u32,
}

/// Sub-plan for YouTube, which is addressed by channel URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelPlan {
    pub channel_urls: Vec<String>,
    pub max_videos: u32,
}

/// The combined outbound request: one plan per requested platform.
///
/// All sub-plans travel together in a single backend call; there are no
/// per-platform sub-calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapePlan {
    pub config: PlanConfig,
    pub tiktok: Option<UserPlan>,
    pub instagram: Option<UserPlan>,
    pub youtube: Option<ChannelPlan>,
}

impl ScrapePlan {
    /// Validate a request and translate it into a plan.
    ///
    /// Fails with `InvalidRequest` when every handle list is empty or the
    /// per-user cap is zero. Performs no I/O.
    pub fn build(request: &ScrapeRequest) -> Result<Self, HarvestError> {
        if request.max_items_per_user == 0 {
            return Err(HarvestError::InvalidRequest(
                "max_items_per_user must be a positive integer".to_string(),
            ));
        }
        if request.requested_platforms().is_empty() {
            return Err(HarvestError::InvalidRequest(
                "at least one platform influencer list must be non-empty".to_string(),
            ));
        }
        Ok(Self::from_request(request))
    }

    /// Translate without validating.
    ///
    /// Used by the read-time projection, where the request already passed
    /// `build` at creation.
    pub fn from_request(request: &ScrapeRequest) -> Self {
        let max_videos = request.max_items_per_user;
        let user_plan = |handles: &[String]| -> Option<UserPlan> {
            (!handles.is_empty()).then(|| UserPlan {
                usernames: handles.to_vec(),
                max_videos,
            })
        };
        let channel_plan = |handles: &[String]| -> Option<ChannelPlan> {
            (!handles.is_empty()).then(|| ChannelPlan {
                channel_urls: handles.to_vec(),
                max_videos,
            })
        };

        Self {
            config: PlanConfig::default(),
            tiktok: user_plan(&request.tiktok_users),
            instagram: user_plan(&request.instagram_users),
            youtube: channel_plan(&request.youtube_users),
        }
    }

    /// Sub-plan handle count for one platform (0 when absent).
    pub fn targets_for(&self, platform: Platform) -> usize {
        match platform {
            Platform::Tiktok => self.tiktok.as_ref().map_or(0, |p| p.usernames.len()),
            Platform::Instagram => self.instagram.as_ref().map_or(0, |p| p.usernames.len()),
            Platform::Youtube => self.youtube.as_ref().map_or(0, |p| p.channel_urls.len()),
        }
    }

    /// Sum of handle counts across all present sub-plans. Frozen onto the
    /// task at creation.
    pub fn total_targets(&self) -> usize {
        Platform::ALL
            .into_iter()
            .map(|p| self.targets_for(p))
            .sum()
    }
}
