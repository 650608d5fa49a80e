//! Power state requested through the control surface.

use serde::{Deserialize, Serialize};

/// On or off.
///
/// Parsed leniently from path segments: `"on"` and `"true"` mean [`On`](Self::On),
/// every other value means [`Off`](Self::Off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PowerState {
    On,
    Off,
}

impl PowerState {
    /// Whether this is [`On`](Self::On).
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for PowerState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl From<&str> for PowerState {
    fn from(value: &str) -> Self {
        Self::from(value == "on" || value == "true")
    }
}

impl From<String> for PowerState {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}
