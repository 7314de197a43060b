//! History entry - a location that was looked up successfully during the session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::LocationKey;

/// Record of the first successful lookup of a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Normalized location text, unique within a history
    pub location_key: LocationKey,
    /// Country code from the snapshot that created the entry
    pub country_code: String,
    /// Wall-clock time of the first successful lookup
    pub searched_at: DateTime<Utc>,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(
        location_key: LocationKey,
        country_code: impl Into<String>,
        searched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            location_key,
            country_code: country_code.into(),
            searched_at,
        }
    }

    /// "Key, CC" label used in the history list
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.location_key, self.country_code)
    }
}
