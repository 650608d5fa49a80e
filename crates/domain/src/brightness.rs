//! Brightness — a percentage that can never leave `[0, 100]`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Light brightness in percent.
///
/// Every constructor clamps, so arithmetic on brightness values (room-wide
/// steps, floors) never produces a value the bridge would reject.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Brightness(f64);

impl Brightness {
    /// Lowest brightness.
    pub const MIN: Self = Self(0.0);
    /// Highest brightness.
    pub const MAX: Self = Self(100.0);

    /// Clamp `value` into range. `NaN` becomes zero.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The percentage as a float.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Add a signed step, clamped.
    #[must_use]
    pub fn step(self, step: i32) -> Self {
        Self::new(self.0 + f64::from(step))
    }

    /// Raise to `floor` if currently below it; never lowers.
    #[must_use]
    pub fn at_least(self, floor: Self) -> Self {
        if self.0 < floor.0 { floor } else { self }
    }
}

impl From<f64> for Brightness {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Brightness> for f64 {
    fn from(value: Brightness) -> Self {
        value.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
