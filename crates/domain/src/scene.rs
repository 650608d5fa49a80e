//! Scene — a named light setup that can be recalled.

use serde::{Deserialize, Serialize};

use crate::id::{RoomId, SceneId};

/// Name of the scene activated by the "night" shortcut.
pub const NIGHTLIGHT: &str = "Nightlight";
/// Name of the scene activated by the "bright" shortcut.
pub const BRIGHT: &str = "Bright";

/// A scene stored on the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub name: String,
    /// Room the scene belongs to.
    pub room_id: RoomId,
}

impl std::fmt::Display for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Short form used by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneListing {
    pub id: SceneId,
    pub name: String,
}

impl From<&Scene> for SceneListing {
    fn from(scene: &Scene) -> Self {
        Self {
            id: scene.id,
            name: scene.name.clone(),
        }
    }
}
