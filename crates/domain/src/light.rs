//! Live light state and the targets it can be read from or written to.

use serde::{Deserialize, Serialize};

use crate::brightness::Brightness;
use crate::id::{GroupId, LampId};

/// Anything on the bridge that has an on flag and a brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum LightTarget {
    Lamp(LampId),
    Group(GroupId),
}

impl From<LampId> for LightTarget {
    fn from(id: LampId) -> Self {
        Self::Lamp(id)
    }
}

impl From<GroupId> for LightTarget {
    fn from(id: GroupId) -> Self {
        Self::Group(id)
    }
}

impl std::fmt::Display for LightTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lamp(id) => write!(f, "lamp {id}"),
            Self::Group(id) => write!(f, "group {id}"),
        }
    }
}

/// Snapshot of a light as reported by the bridge at read time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LightState {
    pub on: bool,
    pub brightness: Brightness,
}
