//! Round-robin scene selection per room.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use lightapi_domain::id::RoomId;

/// Per-room counters for cycling through scenes.
///
/// A counter grows by one per call and is reduced modulo the room's current
/// scene count when read, so it stays valid even if the scene count changes.
/// At `usize::MAX` it restarts just after the index it last produced, so the
/// cycle never repeats a scene. Counters live as long as the owning service.
#[derive(Debug, Default)]
pub struct SceneRotation {
    counters: Mutex<HashMap<RoomId, usize>>,
}

impl SceneRotation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the scene to activate next in `room`, advancing its counter.
    ///
    /// Returns `None` without touching the counter when the room has no scenes.
    pub fn advance(&self, room: RoomId, scene_count: usize) -> Option<usize> {
        if scene_count == 0 {
            return None;
        }
        let mut counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        let counter = counters.entry(room).or_insert(0);
        let index = *counter % scene_count;
        *counter = counter.checked_add(1).unwrap_or(index + 1);
        Some(index)
    }

    /// Current raw counter for `room`, zero if never advanced.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn position(&self, room: RoomId) -> usize {
        self.counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&room)
            .copied()
            .unwrap_or_default()
    }
}
