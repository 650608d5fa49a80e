//! Lamp — a single bridge light.

use serde::{Deserialize, Serialize};

use crate::brightness::Brightness;
use crate::id::{DeviceId, LampId};
use crate::light::LightTarget;

/// A light as listed by the bridge. Holds identifiers only; live state is
/// read through the bridge on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lamp {
    pub id: LampId,
    pub name: String,
    /// The physical device that owns this light. Rooms list devices, not
    /// lights, so room membership is resolved through this id.
    pub parent_id: DeviceId,
}

impl Lamp {
    /// The bridge target for reads and writes on this lamp.
    #[must_use]
    pub fn target(&self) -> LightTarget {
        LightTarget::Lamp(self.id)
    }

    /// Listing entry for this lamp.
    #[must_use]
    pub fn listing(&self) -> LampListing {
        LampListing {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl std::fmt::Display for Lamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Short form used by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LampListing {
    pub id: LampId,
    pub name: String,
}

/// Lamp details including the live state read at request time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LampSummary {
    pub name: String,
    pub id: LampId,
    pub on: bool,
    pub brightness: Brightness,
}
