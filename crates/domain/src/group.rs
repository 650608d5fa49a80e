//! Group — a bridge-side set of lights switched together.

use serde::{Deserialize, Serialize};

use crate::id::{GroupId, RoomId};
use crate::light::LightTarget;

/// A grouped light. Groups, not lamps, decide whether a room counts as lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    /// Owning resource on the bridge. Only groups owned by a known room are
    /// linked into it.
    pub owner_id: RoomId,
}

impl Group {
    /// The bridge target for reads and writes on this group.
    #[must_use]
    pub fn target(&self) -> LightTarget {
        LightTarget::Group(self.id)
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.id.fmt(f)
    }
}
