//! Devices on the mesh lighting gateway.

use serde::{Deserialize, Serialize};

/// Gateway-assigned instance id (e.g. `65537`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeshDeviceId(pub u32);

impl std::fmt::Display for MeshDeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A device paired with the mesh gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshDevice {
    pub id: MeshDeviceId,
    pub name: String,
    /// Whether the device can be switched as a socket.
    pub has_socket_control: bool,
}
