//! # lightapi-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement (driven/outbound ports):
//!   - `LightingBridge` — inventory and live light state on the hub bridge
//!   - `SocketGateway` — device list and socket switching on the mesh gateway
//!   - `HomeRelay` — outbound calls made on behalf of intercom events
//! - Define the **use-cases** driven by inbound adapters:
//!   - `HomeService` — home/room/lamp/scene control over the linked home graph
//!   - `IntercomService` — card allow-list and doorbell relaying
//! - Provide the write-through [`LightHandle`](light_handle::LightHandle)
//!   proxy and the per-room [`SceneRotation`](scene_rotation::SceneRotation)
//!
//! ## Dependency rule
//! Depends on `lightapi-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod light_handle;
pub mod ports;
pub mod scene_rotation;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
