//! Relative humidity value object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Returned when a humidity reading is above 100%
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("humidity {0}% is out of range (0-100)")]
pub struct InvalidHumidity(u8);

/// Relative humidity in percent, always within 0-100
///
/// ```
/// use domain::Humidity;
///
/// assert_eq!(Humidity::new(65).unwrap().to_string(), "65%");
/// assert!(Humidity::new(101).is_err());
/// assert_eq!(Humidity::clamped(250).percent(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Humidity(u8);

impl Humidity {
    /// Upper bound
    pub const MAX: u8 = 100;

    /// Validate a percentage
    pub const fn new(percent: u8) -> Result<Self, InvalidHumidity> {
        if percent > Self::MAX {
            Err(InvalidHumidity(percent))
        } else {
            Ok(Self(percent))
        }
    }

    /// Build from any provider reading, clamping into 0-100
    #[must_use]
    pub const fn clamped(percent: u8) -> Self {
        if percent > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(percent)
        }
    }

    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Humidity {
    type Error = InvalidHumidity;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Humidity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
