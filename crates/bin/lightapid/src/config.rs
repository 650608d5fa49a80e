//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `lightapi.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::str::FromStr;

use lightapi_adapter_hue::HueConfig;
use lightapi_adapter_tradfri::TradfriConfig;
use lightapi_domain::id::RoomId;
use serde::Deserialize;
use uuid::Uuid;

/// Rooms switched on when the home is toggled from inactive.
const DEFAULT_WAKE_ROOMS: [RoomId; 2] = [
    RoomId::from_uuid(Uuid::from_u128(0x9755_fa99_be58_4f8d_bb83_c880_f7bc_193f)),
    RoomId::from_uuid(Uuid::from_u128(0xbe71_2559_b2d8_4fb3_b5ea_5a97_a66e_5de4)),
];

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Which lighting backend to drive.
    pub backend: Backend,
    /// Home behaviour.
    pub home: HomeConfig,
    /// Hue bridge connection.
    pub hue: HueConfig,
    /// TRÅDFRI gateway connection.
    pub tradfri: TradfriConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Home-level settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Rooms switched on when the home is toggled from inactive.
    pub wake_rooms: Vec<RoomId>,
}

/// Lighting backend selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Hue bridge plus TRÅDFRI gateway.
    #[default]
    Hue,
    /// In-memory demo home.
    Virtual,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hue" => Ok(Self::Hue),
            "virtual" => Ok(Self::Virtual),
            other => Err(ConfigError::Validation(format!(
                "unknown backend {other:?}, expected \"hue\" or \"virtual\""
            ))),
        }
    }
}

impl Config {
    /// Load configuration from `lightapi.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("lightapi.toml")?;
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
        if let Ok(val) = std::env::var("LIGHTAPI_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("LIGHTAPI_PORT") {
            self.server.port = parse_port("LIGHTAPI_PORT", &val)?;
        }
        if let Ok(val) = std::env::var("LIGHTAPI_BIND") {
            let (host, port) = parse_bind(&val)?;
            self.server.host = host;
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("LIGHTAPI_BACKEND") {
            self.backend = val.parse()?;
        }
        if let Ok(val) = std::env::var("LIGHTAPI_WAKE_ROOMS") {
            self.home.wake_rooms = parse_room_list(&val)?;
        }
        if let Ok(val) = std::env::var("LIGHTAPI_HUE_HOST") {
            self.hue.host = val;
        }
        if let Ok(val) = std::env::var("LIGHTAPI_HUE_KEY") {
            self.hue.application_key = val;
        }
        if let Ok(val) = std::env::var("LIGHTAPI_TRADFRI_HOST") {
            self.tradfri.host = val;
        }
        if let Ok(val) = std::env::var("LIGHTAPI_TRADFRI_IDENTITY") {
            self.tradfri.identity = val;
        }
        if let Ok(val) = std::env::var("LIGHTAPI_TRADFRI_PSK") {
            self.tradfri.psk = val;
        }
        if let Ok(val) = std::env::var("LIGHTAPI_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.backend == Backend::Hue {
            if self.hue.application_key.is_empty() {
                return Err(ConfigError::Validation(
                    "hue.application_key is required for the hue backend".to_string(),
                ));
            }
            if self.tradfri.identity.is_empty() || self.tradfri.psk.is_empty() {
                return Err(ConfigError::Validation(
                    "tradfri.identity and tradfri.psk are required for the hue backend"
                        .to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_port(var: &str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{var} is not a valid port: {raw:?}")))
}

fn parse_bind(raw: &str) -> Result<(String, u16), ConfigError> {
    let Some((host, port)) = raw.rsplit_once(':') else {
        return Err(ConfigError::Validation(format!(
            "LIGHTAPI_BIND must be host:port, got {raw:?}"
        )));
    };
    Ok((host.to_string(), parse_port("LIGHTAPI_BIND", port)?))
}

fn parse_room_list(raw: &str) -> Result<Vec<RoomId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse()
                .map_err(|_| ConfigError::Validation(format!("invalid room id {item:?}")))
        })
        .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8555,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "lightapid=info,lightapi=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            wake_rooms: DEFAULT_WAKE_ROOMS.to_vec(),
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
