//! Lighting bridge port — the hub that owns lamps, rooms, groups and scenes.

use std::future::Future;

use lightapi_domain::brightness::Brightness;
use lightapi_domain::error::LightApiError;
use lightapi_domain::home::BridgeInventory;
use lightapi_domain::id::SceneId;
use lightapi_domain::light::{LightState, LightTarget};

/// Live access to the lighting bridge.
///
/// Every call goes to the bridge; implementations must not cache light state.
pub trait LightingBridge {
    /// Read the flat resource lists used to build the home graph.
    fn inventory(&self) -> impl Future<Output = Result<BridgeInventory, LightApiError>> + Send;

    /// Read the current on flag and brightness of a lamp or group.
    fn light_state(
        &self,
        target: LightTarget,
    ) -> impl Future<Output = Result<LightState, LightApiError>> + Send;

    /// Switch a lamp or group on or off.
    fn set_on(
        &self,
        target: LightTarget,
        on: bool,
    ) -> impl Future<Output = Result<(), LightApiError>> + Send;

    /// Set the brightness of a lamp or group. Does not touch the on flag.
    fn set_brightness(
        &self,
        target: LightTarget,
        brightness: Brightness,
    ) -> impl Future<Output = Result<(), LightApiError>> + Send;

    /// Recall a stored scene.
    fn recall_scene(&self, scene: SceneId)
    -> impl Future<Output = Result<(), LightApiError>> + Send;
}

impl<T: LightingBridge + Send + Sync> LightingBridge for std::sync::Arc<T> {
    fn inventory(&self) -> impl Future<Output = Result<BridgeInventory, LightApiError>> + Send {
        (**self).inventory()
    }

    fn light_state(
        &self,
        target: LightTarget,
    ) -> impl Future<Output = Result<LightState, LightApiError>> + Send {
        (**self).light_state(target)
    }

    fn set_on(
        &self,
        target: LightTarget,
        on: bool,
    ) -> impl Future<Output = Result<(), LightApiError>> + Send {
        (**self).set_on(target, on)
    }

    fn set_brightness(
        &self,
        target: LightTarget,
        brightness: Brightness,
    ) -> impl Future<Output = Result<(), LightApiError>> + Send {
        (**self).set_brightness(target, brightness)
    }

    fn recall_scene(
        &self,
        scene: SceneId,
    ) -> impl Future<Output = Result<(), LightApiError>> + Send {
        (**self).recall_scene(scene)
    }
}
