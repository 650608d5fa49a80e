//! In-memory lighting bridge.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use lightapi_app::ports::LightingBridge;
use lightapi_domain::brightness::Brightness;
use lightapi_domain::error::LightApiError;
use lightapi_domain::home::BridgeInventory;
use lightapi_domain::id::SceneId;
use lightapi_domain::light::{LightState, LightTarget};

use crate::error::VirtualError;

/// A write received by the [`VirtualBridge`].
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeWrite {
    SetOn(LightTarget, bool),
    SetBrightness(LightTarget, Brightness),
    RecallScene(SceneId),
}

/// Lighting bridge that keeps light state in a map.
///
/// Lamps and groups are independent: switching a group does not change the
/// lamps in its room. Unknown targets read as off at zero brightness.
pub struct VirtualBridge {
    inventory: BridgeInventory,
    states: Mutex<HashMap<LightTarget, LightState>>,
    writes: Mutex<Vec<BridgeWrite>>,
    offline: AtomicBool,
}

impl VirtualBridge {
    #[must_use]
    pub fn new(inventory: BridgeInventory) -> Self {
        Self {
            inventory,
            states: Mutex::new(HashMap::new()),
            writes: Mutex::new(Vec::new()),
            offline: AtomicBool::new(false),
        }
    }

    /// Overwrite the state of a lamp or group without recording a write.
    pub fn put(&self, target: impl Into<LightTarget>, state: LightState) {
        self.lock_states().insert(target.into(), state);
    }

    /// Current state of a lamp or group.
    #[must_use]
    pub fn state_of(&self, target: impl Into<LightTarget>) -> LightState {
        self.lock_states()
            .get(&target.into())
            .copied()
            .unwrap_or_default()
    }

    /// Every write received so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<BridgeWrite> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Make every subsequent call fail with a backend error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), LightApiError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(VirtualError::Offline("bridge").into_domain());
        }
        Ok(())
    }

    fn lock_states(&self) -> MutexGuard<'_, HashMap<LightTarget, LightState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, write: BridgeWrite) {
        tracing::debug!(?write, "virtual bridge write");
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(write);
    }
}

impl LightingBridge for VirtualBridge {
    async fn inventory(&self) -> Result<BridgeInventory, LightApiError> {
        self.check_online()?;
        Ok(self.inventory.clone())
    }

    async fn light_state(&self, target: LightTarget) -> Result<LightState, LightApiError> {
        self.check_online()?;
        Ok(self.state_of(target))
    }

    async fn set_on(&self, target: LightTarget, on: bool) -> Result<(), LightApiError> {
        self.check_online()?;
        self.lock_states().entry(target).or_default().on = on;
        self.record(BridgeWrite::SetOn(target, on));
        Ok(())
    }

    async fn set_brightness(
        &self,
        target: LightTarget,
        brightness: Brightness,
    ) -> Result<(), LightApiError> {
        self.check_online()?;
        self.lock_states().entry(target).or_default().brightness = brightness;
        self.record(BridgeWrite::SetBrightness(target, brightness));
        Ok(())
    }

    async fn recall_scene(&self, scene: SceneId) -> Result<(), LightApiError> {
        self.check_online()?;
        self.record(BridgeWrite::RecallScene(scene));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    #[tokio::test]
    async fn should_serve_the_inventory_it_was_built_with() {
        let bridge = VirtualBridge::new(fixture::inventory());
        let inventory = bridge.inventory().await.unwrap();
        assert_eq!(inventory, fixture::inventory());
    }

    #[tokio::test]
    async fn should_read_unknown_target_as_off() {
        let bridge = VirtualBridge::new(BridgeInventory::default());
        let state = bridge
            .light_state(fixture::BEDSIDE_LAMP.into())
            .await
            .unwrap();
        assert_eq!(state, LightState::default());
    }

    #[tokio::test]
    async fn should_record_writes_in_order() {
        let bridge = VirtualBridge::new(fixture::inventory());
        let target = LightTarget::from(fixture::BEDROOM_GROUP);

        bridge.set_brightness(target, Brightness::new(30.0)).await.unwrap();
        bridge.set_on(target, true).await.unwrap();

        assert_eq!(
            bridge.writes(),
            vec![
                BridgeWrite::SetBrightness(target, Brightness::new(30.0)),
                BridgeWrite::SetOn(target, true),
            ]
        );
        assert_eq!(
            bridge.state_of(target),
            LightState {
                on: true,
                brightness: Brightness::new(30.0),
            }
        );
    }

    #[tokio::test]
    async fn should_not_record_put() {
        let bridge = VirtualBridge::new(fixture::inventory());
        bridge.put(fixture::DINING_GROUP, LightState::default());
        assert!(bridge.writes().is_empty());
    }

    #[tokio::test]
    async fn should_fail_every_call_when_offline() {
        let bridge = VirtualBridge::new(fixture::inventory());
        bridge.set_offline(true);

        assert!(matches!(
            bridge.inventory().await,
            Err(LightApiError::Backend(_))
        ));
        assert!(matches!(
            bridge.recall_scene(fixture::RELAX_SCENE).await,
            Err(LightApiError::Backend(_))
        ));
        assert!(bridge.writes().is_empty());
    }
}
