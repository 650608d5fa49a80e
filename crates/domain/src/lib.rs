//! # lightapi-domain
//!
//! Pure domain model for the lightapi home control layer.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Value objects: [`Brightness`](brightness::Brightness) (always within 0–100)
//!   and [`PowerState`](power::PowerState)
//! - The **home graph**: [`Home`](home::Home) → rooms → lamps, groups, scenes,
//!   built by linking the flat bridge inventory
//! - Mesh-gateway devices
//! - Intercom events, topics and the card allow-list
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO. Live light
//! state is never stored here; it is read and written through the ports in
//! `lightapi-app`.

pub mod error;
pub mod id;

pub mod brightness;
pub mod group;
pub mod home;
pub mod intercom;
pub mod lamp;
pub mod light;
pub mod mesh;
pub mod power;
pub mod room;
pub mod scene;
