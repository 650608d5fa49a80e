//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `intercom.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use lightapi_adapter_mqtt::MqttConfig;
use lightapi_adapter_webhook::WebhookConfig;
use lightapi_domain::intercom::{DEFAULT_TOPIC_PREFIX, IntercomTopics};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Broker connection.
    pub mqtt: MqttConfig,
    /// Relay targets.
    pub webhook: WebhookConfig,
    /// Intercom topics and card allow-list.
    pub intercom: IntercomConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// What to listen for and who may toggle the home.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IntercomConfig {
    /// Topic prefix the intercom publishes under.
    pub topic_prefix: String,
    /// Doorbell topic; `{topic_prefix}/Invite/Event` when unset.
    pub doorbell_topic: Option<String>,
    /// Forward doorbell presses to the home-automation controller.
    pub relay_doorbell: bool,
    /// Card numbers allowed to toggle the home.
    pub allowed_cards: Vec<String>,
}

impl IntercomConfig {
    /// Topics to subscribe to and dispatch on.
    #[must_use]
    pub fn topics(&self) -> IntercomTopics {
        let topics = IntercomTopics::new(self.topic_prefix.clone());
        match &self.doorbell_topic {
            Some(topic) => topics.with_doorbell(topic.clone()),
            None => topics,
        }
    }
}

impl Config {
    /// Load configuration from `intercom.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("intercom.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("INTERCOM_BROKER_HOST") {
            self.mqtt.broker_host = val;
        }
        if let Ok(val) = std::env::var("INTERCOM_BROKER_PORT") {
            self.mqtt.broker_port = parse_port("INTERCOM_BROKER_PORT", &val)?;
        }
        if let Ok(val) = std::env::var("INTERCOM_BROKER_USERNAME") {
            self.mqtt.username = Some(val);
        }
        if let Ok(val) = std::env::var("INTERCOM_BROKER_PASSWORD") {
            self.mqtt.password = Some(val);
        }
        if let Ok(val) = std::env::var("INTERCOM_LIGHTAPI_HOST") {
            self.webhook.lightapi_host = val;
        }
        if let Ok(val) = std::env::var("INTERCOM_LIGHTAPI_PORT") {
            self.webhook.lightapi_port = parse_port("INTERCOM_LIGHTAPI_PORT", &val)?;
        }
        if let Ok(val) = std::env::var("INTERCOM_LOXONE_HOST") {
            self.webhook.loxone_host = val;
        }
        if let Ok(val) = std::env::var("INTERCOM_RELAY_DOORBELL") {
            self.intercom.relay_doorbell = val == "true" || val == "1";
        }
        if let Ok(val) = std::env::var("INTERCOM_ALLOWED_CARDS") {
            self.intercom.allowed_cards = parse_card_list(&val);
        }
        if let Ok(val) = std::env::var("INTERCOM_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mqtt.broker_port == 0 {
            return Err(ConfigError::Validation(
                "mqtt.broker_port must be non-zero".to_string(),
            ));
        }
        if self.mqtt.client_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "mqtt.client_id must not be empty".to_string(),
            ));
        }
        if self.webhook.lightapi_port == 0 {
            return Err(ConfigError::Validation(
                "webhook.lightapi_port must be non-zero".to_string(),
            ));
        }
        if self.intercom.topic_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "intercom.topic_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_port(var: &str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{var} is not a valid port: {raw:?}")))
}

fn parse_card_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|card| !card.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "intercomd=info,lightapi=info".to_string(),
        }
    }
}

impl Default for IntercomConfig {
    fn default() -> Self {
        Self {
            topic_prefix: DEFAULT_TOPIC_PREFIX.to_string(),
            doorbell_topic: None,
            relay_doorbell: false,
            allowed_cards: Vec::new(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
