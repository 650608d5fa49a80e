//! The demo home served by the virtual backend.

use lightapi_domain::group::Group;
use lightapi_domain::home::BridgeInventory;
use lightapi_domain::id::{DeviceId, GroupId, LampId, RoomId, SceneId};
use lightapi_domain::lamp::Lamp;
use lightapi_domain::mesh::{MeshDevice, MeshDeviceId};
use lightapi_domain::room::RoomRecord;
use lightapi_domain::scene::{BRIGHT, NIGHTLIGHT, Scene};
use uuid::Uuid;

pub const DINING_ROOM: RoomId =
    RoomId::from_uuid(Uuid::from_u128(0x9755_fa99_be58_4f8d_bb83_c880_f7bc_193f));
pub const LIVING_ROOM: RoomId =
    RoomId::from_uuid(Uuid::from_u128(0xbe71_2559_b2d8_4fb3_b5ea_5a97_a66e_5de4));
pub const BEDROOM: RoomId =
    RoomId::from_uuid(Uuid::from_u128(0x4c3e_1a52_6f0d_4b8e_9a71_2d5c_8e0f_7b13));

pub const DINING_GROUP: GroupId =
    GroupId::from_uuid(Uuid::from_u128(0x1d0e_7c41_3b2a_4f59_8e06_c4a7_2b91_d350));
pub const LIVING_GROUP: GroupId =
    GroupId::from_uuid(Uuid::from_u128(0x2e1f_8d52_4c3b_4a6a_9f17_d5b8_3ca2_e461));
pub const BEDROOM_GROUP: GroupId =
    GroupId::from_uuid(Uuid::from_u128(0x3f20_9e63_5d4c_4b7b_8028_e6c9_4db3_f572));

pub const DINING_TABLE_LAMP: LampId =
    LampId::from_uuid(Uuid::from_u128(0x5a31_af74_6e5d_4c8c_9139_f7da_5ec4_0683));
pub const DINING_WALL_LAMP: LampId =
    LampId::from_uuid(Uuid::from_u128(0x6b42_b085_7f6e_4d9d_824a_08eb_6fd5_1794));
pub const LIVING_FLOOR_LAMP: LampId =
    LampId::from_uuid(Uuid::from_u128(0x7c53_c196_806f_4eae_935b_19fc_70e6_28a5));
pub const BEDSIDE_LAMP: LampId =
    LampId::from_uuid(Uuid::from_u128(0x8d64_d2a7_9170_4fbf_846c_2a0d_81f7_39b6));

pub const NIGHTLIGHT_SCENE: SceneId =
    SceneId::from_uuid(Uuid::from_u128(0x9e75_e3b8_a281_40c0_957d_3b1e_9208_4ac7));
pub const BRIGHT_SCENE: SceneId =
    SceneId::from_uuid(Uuid::from_u128(0xaf86_f4c9_b392_41d1_868e_4c2f_a319_5bd8));
pub const RELAX_SCENE: SceneId =
    SceneId::from_uuid(Uuid::from_u128(0xb097_05da_c4a3_42e2_979f_5d30_b42a_6ce9));

/// First socket on the mesh gateway.
pub const HALL_SOCKET: MeshDeviceId = MeshDeviceId(65537);
/// Second socket on the mesh gateway.
pub const DESK_SOCKET: MeshDeviceId = MeshDeviceId(65538);
/// A bulb, which has no socket control.
pub const PORCH_BULB: MeshDeviceId = MeshDeviceId(65539);

const DINING_TABLE_DEVICE: DeviceId =
    DeviceId::from_uuid(Uuid::from_u128(0xc1a8_16eb_d5b4_43f3_88a0_6e41_c53b_7dfa));
const DINING_WALL_DEVICE: DeviceId =
    DeviceId::from_uuid(Uuid::from_u128(0xd2b9_27fc_e6c5_4404_99b1_7f52_d64c_8e0b));
const LIVING_FLOOR_DEVICE: DeviceId =
    DeviceId::from_uuid(Uuid::from_u128(0xe3ca_380d_f7d6_4515_8ac2_8063_e75d_9f1c));
const BEDSIDE_DEVICE: DeviceId =
    DeviceId::from_uuid(Uuid::from_u128(0xf4db_491e_08e7_4626_9bd3_9174_f86e_a02d));
const BEDROOM_SWITCH_DEVICE: DeviceId =
    DeviceId::from_uuid(Uuid::from_u128(0x05ec_5a2f_19f8_4737_8ce4_a285_097f_b13e));

fn lamp(id: LampId, name: &str, parent_id: DeviceId) -> Lamp {
    Lamp {
        id,
        name: name.to_string(),
        parent_id,
    }
}

fn scene(id: SceneId, name: &str, room_id: RoomId) -> Scene {
    Scene {
        id,
        name: name.to_string(),
        room_id,
    }
}

/// Flat bridge inventory of the demo home.
///
/// The bedroom lists a wall switch among its children; it has no lamp and
/// is skipped when the home is linked.
#[must_use]
pub fn inventory() -> BridgeInventory {
    BridgeInventory {
        lamps: vec![
            lamp(DINING_TABLE_LAMP, "Dining table", DINING_TABLE_DEVICE),
            lamp(DINING_WALL_LAMP, "Dining wall", DINING_WALL_DEVICE),
            lamp(LIVING_FLOOR_LAMP, "Floor lamp", LIVING_FLOOR_DEVICE),
            lamp(BEDSIDE_LAMP, "Bedside", BEDSIDE_DEVICE),
        ],
        rooms: vec![
            RoomRecord {
                id: DINING_ROOM,
                name: "Dining room".to_string(),
                children: vec![DINING_TABLE_DEVICE, DINING_WALL_DEVICE],
            },
            RoomRecord {
                id: LIVING_ROOM,
                name: "Living room".to_string(),
                children: vec![LIVING_FLOOR_DEVICE],
            },
            RoomRecord {
                id: BEDROOM,
                name: "Bedroom".to_string(),
                children: vec![BEDSIDE_DEVICE, BEDROOM_SWITCH_DEVICE],
            },
        ],
        scenes: vec![
            scene(NIGHTLIGHT_SCENE, NIGHTLIGHT, BEDROOM),
            scene(BRIGHT_SCENE, BRIGHT, BEDROOM),
            scene(RELAX_SCENE, "Relax", BEDROOM),
        ],
        groups: vec![
            Group {
                id: DINING_GROUP,
                owner_id: DINING_ROOM,
            },
            Group {
                id: LIVING_GROUP,
                owner_id: LIVING_ROOM,
            },
            Group {
                id: BEDROOM_GROUP,
                owner_id: BEDROOM,
            },
        ],
    }
}

/// Devices paired with the demo mesh gateway.
#[must_use]
pub fn mesh_devices() -> Vec<MeshDevice> {
    vec![
        MeshDevice {
            id: HALL_SOCKET,
            name: "Hall socket".to_string(),
            has_socket_control: true,
        },
        MeshDevice {
            id: DESK_SOCKET,
            name: "Desk socket".to_string(),
            has_socket_control: true,
        },
        MeshDevice {
            id: PORCH_BULB,
            name: "Porch bulb".to_string(),
            has_socket_control: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightapi_domain::home::Home;

    #[test]
    fn should_carry_default_wake_room_ids() {
        assert_eq!(
            DINING_ROOM.to_string(),
            "9755fa99-be58-4f8d-bb83-c880f7bc193f"
        );
        assert_eq!(
            LIVING_ROOM.to_string(),
            "be712559-b2d8-4fb3-b5ea-5a97a66e5de4"
        );
    }

    #[test]
    fn should_link_every_group_and_scene_into_a_room() {
        let home = Home::link(inventory());
        let bedroom = home.room(BEDROOM).unwrap();

        assert_eq!(bedroom.lamps.len(), 1);
        assert_eq!(bedroom.scenes.len(), 3);
        assert_eq!(home.room(DINING_ROOM).unwrap().lamps.len(), 2);
        assert_eq!(home.room_groups().count(), 3);
    }
}
