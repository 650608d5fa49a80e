//! Webhook relay configuration.

use serde::Deserialize;

/// Where the relay sends its calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Host running the home control service.
    pub lightapi_host: String,
    /// Port of the home control service.
    pub lightapi_port: u16,
    /// Host of the home-automation controller notified on doorbell presses.
    pub loxone_host: String,
    /// Path of the controller's doorbell input.
    pub doorbell_path: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            lightapi_host: "localhost".to_string(),
            lightapi_port: 8555,
            loxone_host: "loxone.local".to_string(),
            doorbell_path: "/dev/sps/io/mqtt_deurbel_gaat/1".to_string(),
            timeout_secs: 10,
        }
    }
}

impl WebhookConfig {
    #[must_use]
    pub fn toggle_url(&self) -> String {
        format!(
            "http://{}:{}/home/active/toggle",
            self.lightapi_host, self.lightapi_port
        )
    }

    #[must_use]
    pub fn doorbell_url(&self) -> String {
        format!("http://{}{}", self.loxone_host, self.doorbell_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_default_urls() {
        let config = WebhookConfig::default();
        assert_eq!(
            config.toggle_url(),
            "http://localhost:8555/home/active/toggle"
        );
        assert_eq!(
            config.doorbell_url(),
            "http://loxone.local/dev/sps/io/mqtt_deurbel_gaat/1"
        );
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let toml = r#"
            lightapi_host = "10.0.0.5"
            loxone_host = "10.0.0.9"
        "#;
        let config: WebhookConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.toggle_url(), "http://10.0.0.5:8555/home/active/toggle");
        assert_eq!(
            config.doorbell_url(),
            "http://10.0.0.9/dev/sps/io/mqtt_deurbel_gaat/1"
        );
    }
}
