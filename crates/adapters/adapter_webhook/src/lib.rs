//! # lightapi-adapter-webhook
//!
//! Outbound HTTP relay used by the intercom listener.
//!
//! | Call | Request |
//! |------|---------|
//! | toggle home | `POST http://{lightapi_host}:{lightapi_port}/home/active/toggle` |
//! | ring doorbell | `POST http://{loxone_host}{doorbell_path}` |
//!
//! Only transport failures are errors. A non-success status is logged at
//! warn level and otherwise ignored.
//!
//! ## Dependency rule
//! Depends on `lightapi-app` (port traits) and `lightapi-domain` only.

pub mod config;
pub mod error;
mod relay;

pub use config::WebhookConfig;
pub use error::WebhookError;
pub use relay::WebhookRelay;
