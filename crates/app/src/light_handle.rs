//! Write-through proxy over one lamp or group.

use lightapi_domain::brightness::Brightness;
use lightapi_domain::error::LightApiError;
use lightapi_domain::light::{LightState, LightTarget};

use crate::ports::LightingBridge;

/// A lamp or group bound to the bridge that owns it.
///
/// Holds no state of its own: every getter reads from the bridge and every
/// setter writes to it immediately.
pub struct LightHandle<'a, B> {
    bridge: &'a B,
    target: LightTarget,
}

impl<'a, B: LightingBridge + Sync> LightHandle<'a, B> {
    pub fn new(bridge: &'a B, target: impl Into<LightTarget>) -> Self {
        Self {
            bridge,
            target: target.into(),
        }
    }

    #[must_use]
    pub fn target(&self) -> LightTarget {
        self.target
    }

    /// Read the current state.
    ///
    /// # Errors
    ///
    /// Propagates bridge failures.
    pub async fn state(&self) -> Result<LightState, LightApiError> {
        self.bridge.light_state(self.target).await
    }

    /// Whether the light is currently on.
    ///
    /// # Errors
    ///
    /// Propagates bridge failures.
    pub async fn is_on(&self) -> Result<bool, LightApiError> {
        Ok(self.state().await?.on)
    }

    /// Switch on or off.
    ///
    /// # Errors
    ///
    /// Propagates bridge failures.
    pub async fn set_on(&self, on: bool) -> Result<(), LightApiError> {
        self.bridge.set_on(self.target, on).await
    }

    /// Set brightness and switch on, whatever the value (zero included).
    ///
    /// # Errors
    ///
    /// Propagates bridge failures.
    pub async fn set_brightness(&self, brightness: Brightness) -> Result<(), LightApiError> {
        self.bridge.set_brightness(self.target, brightness).await?;
        self.bridge.set_on(self.target, true).await
    }

    /// Add a signed step to the current brightness. Returns the value written.
    ///
    /// # Errors
    ///
    /// Propagates bridge failures.
    pub async fn step_brightness(&self, step: i32) -> Result<Brightness, LightApiError> {
        let next = self.state().await?.brightness.step(step);
        self.set_brightness(next).await?;
        Ok(next)
    }

    /// Raise brightness to at least `floor`. Returns the value written.
    ///
    /// # Errors
    ///
    /// Propagates bridge failures.
    pub async fn raise_brightness(&self, floor: Brightness) -> Result<Brightness, LightApiError> {
        let next = self.state().await?.brightness.at_least(floor);
        self.set_brightness(next).await?;
        Ok(next)
    }
}
