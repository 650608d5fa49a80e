//! # lightapi-adapter-hue
//!
//! Philips Hue bridge adapter, speaking the CLIP v2 REST API over HTTPS.
//!
//! ## Responsibilities
//! - Read the `light`, `room`, `scene` and `grouped_light` collections and
//!   map them into a [`BridgeInventory`](lightapi_domain::home::BridgeInventory)
//! - Read and write the on flag and brightness of lights and grouped lights
//! - Recall scenes
//!
//! The bridge serves a self-signed certificate, which is accepted unless
//! `accept_invalid_certs` is turned off. Every request carries the
//! `hue-application-key` header.
//!
//! ## Dependency rule
//! Depends on `lightapi-app` (port traits) and `lightapi-domain` only.

mod client;
pub mod config;
pub mod error;
mod model;

pub use client::HueBridge;
pub use config::HueConfig;
pub use error::HueError;
