//! Typed identifier newtypes backed by UUIDs.
//!
//! The lighting bridge identifies every resource with a UUID, so each kind of
//! resource gets its own wrapper to keep foreign keys from being mixed up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Lamp`](crate::lamp::Lamp) (bridge `light` resource).
    LampId
);

define_id!(
    /// Identifier of a physical bridge device; a lamp's parent.
    DeviceId
);

define_id!(
    /// Identifier of a [`Room`](crate::room::Room).
    RoomId
);

define_id!(
    /// Identifier of a [`Group`](crate::group::Group) (bridge `grouped_light`).
    GroupId
);

define_id!(
    /// Identifier of a [`Scene`](crate::scene::Scene).
    SceneId
);
