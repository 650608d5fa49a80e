//! TRÅDFRI gateway configuration.

use serde::Deserialize;

/// Configuration for the TRÅDFRI gateway adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TradfriConfig {
    /// Gateway hostname or IP address.
    pub host: String,
    /// CoAPS port.
    pub port: u16,
    /// PSK identity registered on the gateway.
    pub identity: String,
    /// Pre-shared key for `identity`.
    pub psk: String,
    /// How long to wait for the handshake and for each response, in seconds.
    pub timeout_secs: u64,
}

impl Default for TradfriConfig {
    fn default() -> Self {
        Self {
            host: "tradfri.local".to_string(),
            port: 5684,
            identity: String::new(),
            psk: String::new(),
            timeout_secs: 10,
        }
    }
}

impl TradfriConfig {
    /// `host:port`, as passed to the socket resolver.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
