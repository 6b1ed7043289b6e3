//! Task identifiers.
//!
//! Ids are ULIDs (Universally Unique Lexicographically Sortable Identifier):
//! - timestamp-prefixed, so ids sort by creation time
//! - generated without coordination
//! - 128-bit, UUID-sized
//!
//! The list ordering tie-break relies on `Ord`: ids minted later compare
//! greater (see `ports::id_generator` for the monotonic guarantee within a
//! process).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Identifier of a scrape task.
///
/// Serialized as the bare ULID string; `Display` adds a `task-` prefix for
/// logs and CLI output.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TaskId(Ulid);

impl TaskId {
    /// Prefix used in the human-readable form.
    pub const PREFIX: &'static str = "task-";

    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for TaskId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

/// Error returned when a task id string cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("invalid task id: {0}")]
pub struct ParseTaskIdError(String);

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    /// Accepts both the display form (`task-01H...`) and the bare ULID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        Ulid::from_string(raw)
            .map(TaskId)
            .map_err(|_| ParseTaskIdError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_task_prefix() {
        let id = TaskId::from_ulid(Ulid::new());
        assert!(id.to_string().starts_with("task-"));
    }

    #[test]
    fn parses_with_and_without_prefix() {
        let id = TaskId::from_ulid(Ulid::new());

        let from_display: TaskId = id.to_string().parse().unwrap();
        assert_eq!(from_display, id);

        let from_bare: TaskId = id.as_ulid().to_string().parse().unwrap();
        assert_eq!(from_bare, id);

        assert!("not-a-ulid".parse::<TaskId>().is_err());
    }

    #[test]
    fn serde_roundtrip_as_bare_ulid() {
        let id = TaskId::from_ulid(Ulid::new());

        let serialized = serde_json::to_string(&id).unwrap();
        // Wire form carries no prefix.
        assert_eq!(serialized, format!("\"{}\"", id.as_ulid()));

        let deserialized: TaskId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn ids_sort_by_creation_time() {
        let id1 = TaskId::from_ulid(Ulid::new());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = TaskId::from_ulid(Ulid::new());

        assert!(id1 < id2);
    }
}
