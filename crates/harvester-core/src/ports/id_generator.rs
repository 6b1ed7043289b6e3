//! IdGenerator port - task id minting.
//!
//! Ids are ULIDs built from (clock millis, random). A plain
//! `Ulid::from_parts` would leave same-millisecond ids in random order, so
//! the generator keeps the last issued id and bumps the candidate above it
//! when needed: within one process, ids are strictly increasing in creation
//! order. The list ordering tie-break ("later-created wins") depends on
//! this.

use std::sync::Mutex;

use ulid::Ulid;

use crate::domain::TaskId;
use crate::ports::Clock;

/// Mints task ids.
pub trait IdGenerator: Send + Sync {
    fn next_task_id(&self) -> TaskId;
}

/// ULID generator driven by an injected clock.
///
/// With `FixedClock` the timestamp part is deterministic; the random part
/// still differs per call.
pub struct UlidGenerator<C> {
    clock: C,
    last: Mutex<Option<Ulid>>,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last: Mutex::new(None),
        }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn next_task_id(&self) -> TaskId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let candidate = Ulid::from_parts(timestamp_ms, rand::random());

        let mut last = self.last.lock().expect("id generator mutex poisoned");
        let next = match *last {
            // Same millisecond (or a clock step backwards): force strict
            // increase. increment() only fails at the numeric ceiling.
            Some(prev) if candidate <= prev => prev.increment().unwrap_or(candidate),
            _ => candidate,
        };
        *last = Some(next);
        TaskId::from_ulid(next)
    }
}
