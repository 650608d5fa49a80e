//! TRÅDFRI JSON payloads. Fields are keyed by IPSO/LwM2M resource ids.

use serde::{Deserialize, Serialize};

use lightapi_domain::mesh::{MeshDevice, MeshDeviceId};

/// One entry of a device's `3312` (socket control) list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SocketControl {
    /// `5850`: on/off as 0 or 1.
    #[serde(rename = "5850")]
    pub state: u8,
}

/// `GET /15001/{id}`.
#[derive(Debug, Deserialize)]
pub struct DeviceResource {
    #[serde(rename = "9003")]
    pub id: u32,
    #[serde(rename = "9001", default)]
    pub name: String,
    #[serde(rename = "3312", default)]
    pub sockets: Option<Vec<serde_json::Value>>,
}

impl From<DeviceResource> for MeshDevice {
    fn from(device: DeviceResource) -> Self {
        Self {
            id: MeshDeviceId(device.id),
            name: device.name,
            has_socket_control: device.sockets.is_some_and(|sockets| !sockets.is_empty()),
        }
    }
}

/// `PUT /15001/{id}` body switching a socket.
#[derive(Debug, Serialize)]
pub struct SocketCommand {
    #[serde(rename = "3312")]
    pub sockets: [SocketControl; 1],
}

impl SocketCommand {
    pub fn new(on: bool) -> Self {
        Self {
            sockets: [SocketControl { state: u8::from(on) }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_detect_socket_control() {
        let device: DeviceResource = serde_json::from_value(json!({
            "9001": "TRADFRI control outlet",
            "9003": 65537,
            "5750": 3,
            "3312": [{"5850": 1, "9003": 0}]
        }))
        .unwrap();

        let device = MeshDevice::from(device);

        assert_eq!(device.id, MeshDeviceId(65537));
        assert_eq!(device.name, "TRADFRI control outlet");
        assert!(device.has_socket_control);
    }

    #[test]
    fn should_not_flag_bulb_as_socket() {
        let device: DeviceResource = serde_json::from_value(json!({
            "9001": "TRADFRI bulb",
            "9003": 65539,
            "3311": [{"5850": 0}]
        }))
        .unwrap();

        assert!(!MeshDevice::from(device).has_socket_control);
    }

    #[test]
    fn should_serialize_socket_command() {
        assert_eq!(
            serde_json::to_value(SocketCommand::new(true)).unwrap(),
            json!({"3312": [{"5850": 1}]})
        );
        assert_eq!(
            serde_json::to_value(SocketCommand::new(false)).unwrap(),
            json!({"3312": [{"5850": 0}]})
        );
    }
}
