//! # lightapi-adapter-tradfri
//!
//! IKEA TRÅDFRI gateway adapter.
//!
//! The gateway speaks CoAP over DTLS with a pre-shared key
//! (`TLS_PSK_WITH_AES_128_CCM_8`). Each request opens its own DTLS session,
//! sends one confirmable message and waits for the matching response.
//!
//! ## Layers
//! - [`coap`] — pure packet building and response checking
//! - [`transport`] — the [`CoapTransport`] seam and its DTLS implementation
//! - [`TradfriGateway`] — the socket gateway port on top of a transport
//!
//! ## Dependency rule
//! Depends on `lightapi-app` (port traits) and `lightapi-domain` only.

pub mod coap;
pub mod config;
pub mod error;
mod gateway;
mod model;
pub mod transport;

pub use config::TradfriConfig;
pub use error::TradfriError;
pub use gateway::TradfriGateway;
pub use transport::{CoapTransport, DtlsTransport};
