//! # lightapi-adapter-mqtt
//!
//! MQTT adapter for the door intercom, built on
//! [rumqttc](https://docs.rs/rumqttc).
//!
//! ## Responsibilities
//! - Keep a broker connection open and (re)subscribe to the intercom topic
//!   tree after every connection acknowledgement
//! - Hand each published message to
//!   [`IntercomService`](lightapi_app::services::intercom_service::IntercomService)
//! - Stop with an error when the service rejects a message, so the process
//!   exits non-zero
//!
//! Broker errors are logged and polling resumes after a fixed delay; the
//! reconnect itself is rumqttc's.
//!
//! ## Dependency rule
//! Depends on `lightapi-app` (services and port traits) and
//! `lightapi-domain` only.

pub mod config;
pub mod error;
mod listener;

pub use config::MqttConfig;
pub use error::MqttError;
pub use listener::IntercomListener;
