//! In-memory port implementations shared by the service tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use lightapi_domain::brightness::Brightness;
use lightapi_domain::error::LightApiError;
use lightapi_domain::home::BridgeInventory;
use lightapi_domain::id::SceneId;
use lightapi_domain::light::{LightState, LightTarget};
use lightapi_domain::mesh::{MeshDevice, MeshDeviceId};

use crate::ports::{HomeRelay, LightingBridge, SocketGateway};

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCall {
    SetOn(LightTarget, bool),
    SetBrightness(LightTarget, Brightness),
    RecallScene(SceneId),
}

#[derive(Default)]
pub struct FakeBridge {
    pub inventory: BridgeInventory,
    states: Mutex<HashMap<LightTarget, LightState>>,
    calls: Mutex<Vec<BridgeCall>>,
}

impl FakeBridge {
    pub fn with_inventory(inventory: BridgeInventory) -> Self {
        Self {
            inventory,
            ..Self::default()
        }
    }

    pub fn put(&self, target: impl Into<LightTarget>, on: bool, brightness: f64) {
        self.states.lock().unwrap().insert(
            target.into(),
            LightState {
                on,
                brightness: Brightness::new(brightness),
            },
        );
    }

    pub fn state_of(&self, target: impl Into<LightTarget>) -> LightState {
        self.states
            .lock()
            .unwrap()
            .get(&target.into())
            .copied()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<BridgeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn recalled(&self) -> Vec<SceneId> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                BridgeCall::RecallScene(id) => Some(id),
                _ => None,
            })
            .collect()
    }
}

impl LightingBridge for FakeBridge {
    async fn inventory(&self) -> Result<BridgeInventory, LightApiError> {
        Ok(self.inventory.clone())
    }

    async fn light_state(&self, target: LightTarget) -> Result<LightState, LightApiError> {
        Ok(self.state_of(target))
    }

    async fn set_on(&self, target: LightTarget, on: bool) -> Result<(), LightApiError> {
        self.calls.lock().unwrap().push(BridgeCall::SetOn(target, on));
        self.states.lock().unwrap().entry(target).or_default().on = on;
        Ok(())
    }

    async fn set_brightness(
        &self,
        target: LightTarget,
        brightness: Brightness,
    ) -> Result<(), LightApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(BridgeCall::SetBrightness(target, brightness));
        self.states
            .lock()
            .unwrap()
            .entry(target)
            .or_default()
            .brightness = brightness;
        Ok(())
    }

    async fn recall_scene(&self, scene: SceneId) -> Result<(), LightApiError> {
        self.calls.lock().unwrap().push(BridgeCall::RecallScene(scene));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeGateway {
    pub devices: Vec<MeshDevice>,
    sockets: Mutex<HashMap<MeshDeviceId, bool>>,
}

impl FakeGateway {
    pub fn with_devices(devices: Vec<MeshDevice>) -> Self {
        Self {
            devices,
            ..Self::default()
        }
    }

    pub fn socket(&self, id: MeshDeviceId) -> Option<bool> {
        self.sockets.lock().unwrap().get(&id).copied()
    }

    pub fn writes(&self) -> usize {
        self.sockets.lock().unwrap().len()
    }
}

impl SocketGateway for FakeGateway {
    async fn devices(&self) -> Result<Vec<MeshDevice>, LightApiError> {
        Ok(self.devices.clone())
    }

    async fn set_socket_state(&self, device: MeshDeviceId, on: bool) -> Result<(), LightApiError> {
        self.sockets.lock().unwrap().insert(device, on);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeRelay {
    pub toggles: AtomicUsize,
    pub doorbells: AtomicUsize,
}

impl HomeRelay for FakeRelay {
    async fn toggle_home(&self) -> Result<(), LightApiError> {
        self.toggles.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn ring_doorbell(&self) -> Result<(), LightApiError> {
        self.doorbells.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
