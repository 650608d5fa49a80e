//! Home — the aggregate root mirroring one bridge's resource graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::id::{LampId, RoomId};
use crate::lamp::Lamp;
use crate::room::{Room, RoomRecord};
use crate::scene::Scene;

/// Flat resource lists as read from the bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeInventory {
    pub lamps: Vec<Lamp>,
    pub rooms: Vec<RoomRecord>,
    pub scenes: Vec<Scene>,
    pub groups: Vec<Group>,
}

/// Whether anything in the home is lit, as returned by `GET /home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeStatus {
    pub home_active: bool,
}

/// The linked home graph.
///
/// Built once from a [`BridgeInventory`] and never refreshed: rooms or lamps
/// added on the bridge afterwards are invisible until the home is rebuilt.
#[derive(Debug, Clone, Default)]
pub struct Home {
    lamps: Vec<Lamp>,
    rooms: Vec<Room>,
    scenes: Vec<Scene>,
    groups: Vec<Group>,
}

impl Home {
    /// Build the graph in two passes: rooms first (resolving their lamps),
    /// then scenes and groups attached to the room their foreign key names.
    /// Scenes and groups pointing at an unknown room are kept in the flat
    /// lists but belong to no room.
    #[must_use]
    pub fn link(inventory: BridgeInventory) -> Self {
        let BridgeInventory {
            lamps,
            rooms,
            scenes,
            groups,
        } = inventory;

        let mut rooms: Vec<Room> = rooms
            .into_iter()
            .map(|record| Room::from_record(record, &lamps))
            .collect();

        let index: HashMap<RoomId, usize> = rooms
            .iter()
            .enumerate()
            .map(|(pos, room)| (room.id, pos))
            .collect();

        for scene in &scenes {
            if let Some(&pos) = index.get(&scene.room_id) {
                rooms[pos].scenes.push(scene.clone());
            }
        }
        for group in &groups {
            if let Some(&pos) = index.get(&group.owner_id) {
                rooms[pos].groups.push(*group);
            }
        }

        Self {
            lamps,
            rooms,
            scenes,
            groups,
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn lamps(&self) -> &[Lamp] {
        &self.lamps
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    #[must_use]
    pub fn lamp(&self, id: LampId) -> Option<&Lamp> {
        self.lamps.iter().find(|lamp| lamp.id == id)
    }

    /// Every group linked into some room, room by room.
    pub fn room_groups(&self) -> impl Iterator<Item = &Group> {
        self.rooms.iter().flat_map(|room| room.groups.iter())
    }
}
