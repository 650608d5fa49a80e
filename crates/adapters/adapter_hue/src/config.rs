//! Hue bridge configuration.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::error::HueError;

/// Header carrying the application key on every CLIP v2 request.
pub const APPLICATION_KEY_HEADER: &str = "hue-application-key";

/// Configuration for the Hue bridge adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HueConfig {
    /// Bridge hostname or IP address.
    pub host: String,
    /// Application key obtained by pressing the link button.
    pub application_key: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Accept the bridge's self-signed certificate.
    pub accept_invalid_certs: bool,
}

impl Default for HueConfig {
    fn default() -> Self {
        Self {
            host: "philips-hue.local".to_string(),
            application_key: String::new(),
            timeout_secs: 10,
            accept_invalid_certs: true,
        }
    }
}

impl HueConfig {
    /// `https://{host}`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host)
    }

    /// Build a `reqwest::Client` carrying the application key.
    ///
    /// # Errors
    ///
    /// Returns [`HueError::Client`] if the key is not a valid header value
    /// or the TLS backend cannot be initialised.
    pub fn build_client(&self) -> Result<reqwest::Client, HueError> {
        let mut key =
            HeaderValue::from_str(&self.application_key).map_err(|_| HueError::InvalidKey)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(APPLICATION_KEY_HEADER, key);

        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .default_headers(headers)
            .build()
            .map_err(HueError::Client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = HueConfig::default();
        assert_eq!(config.host, "philips-hue.local");
        assert!(config.application_key.is_empty());
        assert_eq!(config.timeout_secs, 10);
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let toml = r#"
            host = "192.168.1.20"
            application_key = "abc"
        "#;
        let config: HueConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url(), "https://192.168.1.20");
        assert_eq!(config.application_key, "abc");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn should_reject_key_with_newline() {
        let config = HueConfig {
            application_key: "bad\nkey".to_string(),
            ..HueConfig::default()
        };
        assert!(matches!(config.build_client(), Err(HueError::InvalidKey)));
    }
}
