//! # lightapi-adapter-virtual
//!
//! In-memory implementations of the lighting bridge and mesh gateway ports,
//! pre-loaded with a small demo home.
//!
//! ## Demo home
//!
//! | Room | Id | Lamps | Scenes |
//! |------|----|-------|--------|
//! | Dining room | [`fixture::DINING_ROOM`] | 2 | none |
//! | Living room | [`fixture::LIVING_ROOM`] | 1 | none |
//! | Bedroom | [`fixture::BEDROOM`] | 1 | `Nightlight`, `Bright`, `Relax` |
//!
//! Each room owns one group. The mesh gateway has two sockets and one bulb.
//! Dining and living room carry the default wake room ids.
//!
//! Every write is recorded so tests can assert on vendor traffic, and both
//! backends can be taken offline to exercise failure paths.
//!
//! ## Dependency rule
//!
//! Depends on `lightapi-app` (port traits) and `lightapi-domain` only.

mod bridge;
mod error;
pub mod fixture;
mod gateway;

pub use bridge::{BridgeWrite, VirtualBridge};
pub use error::VirtualError;
pub use gateway::VirtualGateway;

/// A bridge and gateway loaded with the demo home.
#[must_use]
pub fn demo() -> (VirtualBridge, VirtualGateway) {
    (
        VirtualBridge::new(fixture::inventory()),
        VirtualGateway::new(fixture::mesh_devices()),
    )
}
