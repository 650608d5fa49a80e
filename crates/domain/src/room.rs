//! Room — a physical room on the bridge with its lamps, groups and scenes.

use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::id::{DeviceId, GroupId, RoomId};
use crate::lamp::Lamp;
use crate::scene::Scene;

/// A room as returned by the bridge, before it is linked into a [`Home`](crate::home::Home).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: RoomId,
    pub name: String,
    /// Devices placed in this room.
    pub children: Vec<DeviceId>,
}

/// A linked room.
///
/// `lamps` is resolved when the room is built; `scenes` and `groups` are
/// filled once by the home's linking pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub lamps: Vec<Lamp>,
    pub scenes: Vec<Scene>,
    pub groups: Vec<Group>,
}

impl Room {
    /// Build a room from its record, resolving each child device to the first
    /// lamp it owns. Children without a lamp (switches, sensors) are skipped.
    #[must_use]
    pub fn from_record(record: RoomRecord, lamps: &[Lamp]) -> Self {
        let lamps = record
            .children
            .iter()
            .filter_map(|device| lamps.iter().find(|lamp| lamp.parent_id == *device))
            .cloned()
            .collect();

        Self {
            id: record.id,
            name: record.name,
            lamps,
            scenes: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Scenes with the given name, in link order.
    pub fn scenes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Scene> {
        self.scenes.iter().filter(move |scene| scene.name == name)
    }

    /// Listing entry for this room.
    #[must_use]
    pub fn listing(&self) -> RoomListing {
        RoomListing {
            id: self.id,
            name: self.name.clone(),
        }
    }

    /// Structural summary (no live state).
    #[must_use]
    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            name: self.name.clone(),
            id: self.id,
            nr_lamps: self.lamps.len(),
            lamps: self.lamps.iter().map(ToString::to_string).collect(),
            nr_scenes: self.scenes.len(),
            scenes: self.scenes.iter().map(ToString::to_string).collect(),
            nr_groups: self.groups.len(),
            groups: self.groups.iter().map(|group| group.id).collect(),
        }
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.id)
    }
}

/// Short form used by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomListing {
    pub id: RoomId,
    pub name: String,
}

/// Room description returned by `GET /room/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub name: String,
    pub id: RoomId,
    pub nr_lamps: usize,
    pub lamps: Vec<String>,
    pub nr_scenes: usize,
    pub scenes: Vec<String>,
    pub nr_groups: usize,
    pub groups: Vec<GroupId>,
}
