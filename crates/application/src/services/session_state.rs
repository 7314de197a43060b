//! Session state exposed to the view
//!
//! The view never mutates this; it receives an owned copy after every
//! transition and renders from it.

use domain::{LocationKey, SearchHistory, WeatherSnapshot};
use serde::Serialize;

use crate::error::ApplicationError;

/// Why the last lookup produced no snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupFailure {
    /// Network failure, unknown location or any other provider error
    LookupFailed,
}

impl LookupFailure {
    /// Indicator shown to the user
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::LookupFailed => "Not Found",
        }
    }
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.user_message())
    }
}

/// Collapse a gateway error into the failure kind stored in the session.
///
/// Every cause currently maps to `LookupFailed`. Splitting network errors
/// from unknown locations only needs a new variant and a match here.
#[must_use]
pub const fn classify_lookup_error(_error: &ApplicationError) -> LookupFailure {
    LookupFailure::LookupFailed
}

/// Where the controller's state machine currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    /// No current location
    Idle,
    /// A lookup for the current location is in flight
    Loading,
    /// A snapshot for the current location is present
    Loaded,
    /// The last lookup failed
    Failed,
}

/// Everything the view needs to render one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub current_location: Option<LocationKey>,
    pub current_snapshot: Option<WeatherSnapshot>,
    pub is_loading: bool,
    pub last_error: Option<LookupFailure>,
    pub history: SearchHistory,
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        if self.is_loading {
            SearchPhase::Loading
        } else if self.current_snapshot.is_some() {
            SearchPhase::Loaded
        } else if self.last_error.is_some() {
            SearchPhase::Failed
        } else {
            SearchPhase::Idle
        }
    }

    /// Clear everything except the history
    pub(crate) fn reset_display(&mut self) {
        self.current_location = None;
        self.current_snapshot = None;
        self.is_loading = false;
        self.last_error = None;
    }
}
