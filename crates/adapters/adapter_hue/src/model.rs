//! CLIP v2 wire types.

use serde::{Deserialize, Serialize};

use lightapi_domain::brightness::Brightness;
use lightapi_domain::group::Group;
use lightapi_domain::id::{DeviceId, GroupId, LampId, RoomId, SceneId};
use lightapi_domain::lamp::Lamp;
use lightapi_domain::light::LightState;
use lightapi_domain::room::RoomRecord;
use lightapi_domain::scene::Scene;

/// `{"errors": [...], "data": [...]}` wrapper around every response.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub errors: Vec<EnvelopeError>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeError {
    pub description: String,
}

/// Pointer to another resource.
#[derive(Debug, Deserialize)]
pub struct ResourceRef<I> {
    pub rid: I,
    pub rtype: String,
}

#[derive(Debug, Deserialize)]
pub struct Metadata {
    pub name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct On {
    pub on: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dimming {
    pub brightness: f64,
}

/// `light` resource.
#[derive(Debug, Deserialize)]
pub struct LightResource {
    pub id: LampId,
    pub owner: ResourceRef<DeviceId>,
    pub metadata: Metadata,
}

impl From<LightResource> for Lamp {
    fn from(light: LightResource) -> Self {
        Self {
            id: light.id,
            name: light.metadata.name,
            parent_id: light.owner.rid,
        }
    }
}

/// `room` resource. Children that are not devices are dropped.
#[derive(Debug, Deserialize)]
pub struct RoomResource {
    pub id: RoomId,
    pub metadata: Metadata,
    #[serde(default = "Vec::new")]
    pub children: Vec<ResourceRef<DeviceId>>,
}

impl From<RoomResource> for RoomRecord {
    fn from(room: RoomResource) -> Self {
        Self {
            id: room.id,
            name: room.metadata.name,
            children: room
                .children
                .into_iter()
                .filter(|child| child.rtype == "device")
                .map(|child| child.rid)
                .collect(),
        }
    }
}

/// `scene` resource. `group` may point at a zone; such scenes never link.
#[derive(Debug, Deserialize)]
pub struct SceneResource {
    pub id: SceneId,
    pub metadata: Metadata,
    pub group: ResourceRef<RoomId>,
}

impl From<SceneResource> for Scene {
    fn from(scene: SceneResource) -> Self {
        Self {
            id: scene.id,
            name: scene.metadata.name,
            room_id: scene.group.rid,
        }
    }
}

/// `grouped_light` resource. The owner may be a room, a zone or the
/// bridge home; only rooms link.
#[derive(Debug, Deserialize)]
pub struct GroupedLightResource {
    pub id: GroupId,
    pub owner: ResourceRef<RoomId>,
}

impl From<GroupedLightResource> for Group {
    fn from(group: GroupedLightResource) -> Self {
        Self {
            id: group.id,
            owner_id: group.owner.rid,
        }
    }
}

/// The stateful part shared by `light` and `grouped_light`.
#[derive(Debug, Deserialize)]
pub struct LightStateResource {
    pub on: Option<On>,
    pub dimming: Option<Dimming>,
}

impl From<LightStateResource> for LightState {
    fn from(resource: LightStateResource) -> Self {
        Self {
            on: resource.on.is_some_and(|on| on.on),
            brightness: resource
                .dimming
                .map_or(Brightness::MIN, |dimming| Brightness::new(dimming.brightness)),
        }
    }
}

/// Body of a `PUT` on a light or grouped light.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LightUpdate {
    On { on: On },
    Dimming { dimming: Dimming },
}

/// Body of a `PUT` on a scene.
#[derive(Debug, Serialize)]
pub struct SceneRecall {
    pub recall: RecallAction,
}

#[derive(Debug, Serialize)]
pub struct RecallAction {
    pub action: &'static str,
}

impl SceneRecall {
    pub fn active() -> Self {
        Self {
            recall: RecallAction { action: "active" },
        }
    }
}
