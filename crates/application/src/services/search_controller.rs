//! Search controller
//!
//! Owns the session state and drives the lookup state machine:
//!
//! ```text
//! Idle ──submit/revisit──▶ Loading ──ok──▶ Loaded
//!                             │
//!                             └──err──▶ Failed
//! ```
//!
//! Any state goes back to `Loading` on a new submit or revisit. Every lookup
//! carries a request token; only the completion holding the newest token is
//! applied, so a slow response for an older target can never overwrite the
//! outcome of a newer one.

use std::{fmt, sync::Arc, time::Duration};

use domain::{HistoryEntry, LocationKey, WeatherSnapshot};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use super::session_state::{LookupFailure, SessionState, classify_lookup_error};
use crate::{
    error::ApplicationError,
    ports::{ClockPort, WeatherPort},
};

/// Default upper bound for a single gateway call
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 15;

/// Configuration for the search controller
#[derive(Debug, Clone)]
pub struct SearchControllerConfig {
    /// Give up on a gateway call after this long (default: 15s)
    pub lookup_timeout: Duration,
}

impl Default for SearchControllerConfig {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}

/// Identity of one lookup; later lookups get larger tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Handle for a lookup that has started but not completed
#[derive(Debug, Clone)]
pub struct LookupTicket {
    pub token: RequestToken,
    pub location: LocationKey,
}

/// What happened when a lookup completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Snapshot applied to the session
    Loaded,
    /// Failure recorded in the session
    Failed(LookupFailure),
    /// A newer lookup started meanwhile; the result was dropped
    Superseded,
}

/// What happened when a history entry was deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// No entry had that key
    NotPresent,
    /// Entry removed; the current display is unaffected
    Removed,
    /// The current location was removed and the first remaining entry was looked up
    Reselected {
        location: LocationKey,
        outcome: LookupOutcome,
    },
    /// The current location was removed and the history is now empty
    Reset,
}

/// Intent emitted by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Text typed into the search box
    Submit(String),
    /// A history item was clicked
    HistoryItemClick(LocationKey),
    /// A history item's delete button was clicked
    HistoryItemDelete(LocationKey),
}

/// Result of dispatching a [`ViewEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Blank input, nothing happened
    Ignored,
    Lookup(LookupOutcome),
    Removal(Removal),
}

#[derive(Debug, Default)]
struct Inner {
    state: SessionState,
    latest: Option<RequestToken>,
    issued: u64,
}

impl Inner {
    fn next_token(&mut self) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.latest = Some(token);
        token
    }
}

/// Orchestrates submit, revisit and delete into weather lookups
pub struct SearchController {
    weather: Arc<dyn WeatherPort>,
    clock: Arc<dyn ClockPort>,
    config: SearchControllerConfig,
    inner: Mutex<Inner>,
}

impl fmt::Debug for SearchController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchController")
            .field("config", &self.config)
            .field("state", &self.inner.lock().state)
            .finish_non_exhaustive()
    }
}

impl SearchController {
    /// Create a controller in the `Idle` state with an empty history
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self::with_config(weather, clock, SearchControllerConfig::default())
    }

    #[must_use]
    pub fn with_config(
        weather: Arc<dyn WeatherPort>,
        clock: Arc<dyn ClockPort>,
        config: SearchControllerConfig,
    ) -> Self {
        Self {
            weather,
            clock,
            config,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Read-only copy of the session for rendering
    pub fn state(&self) -> SessionState {
        self.inner.lock().state.clone()
    }

    /// Route a view event to the matching operation
    pub async fn dispatch(&self, event: ViewEvent) -> EventOutcome {
        match event {
            ViewEvent::Submit(text) => self
                .submit(&text)
                .await
                .map_or(EventOutcome::Ignored, EventOutcome::Lookup),
            ViewEvent::HistoryItemClick(key) => EventOutcome::Lookup(self.revisit(key).await),
            ViewEvent::HistoryItemDelete(key) => {
                EventOutcome::Removal(self.remove_history_entry(&key).await)
            },
        }
    }

    /// Look up free-form user input.
    ///
    /// Returns `None` without touching the session when the input is blank.
    pub async fn submit(&self, raw: &str) -> Option<LookupOutcome> {
        let Some(key) = LocationKey::parse(raw) else {
            debug!("Ignoring blank search input");
            return None;
        };
        Some(self.lookup(key).await)
    }

    /// Look up an already-normalized key, typically from the history list
    pub async fn revisit(&self, key: LocationKey) -> LookupOutcome {
        self.lookup(key).await
    }

    /// Delete a history entry, moving the selection if it was current.
    ///
    /// Deleting the current location selects the first remaining entry and
    /// looks it up again, or returns to `Idle` when nothing is left.
    #[instrument(skip(self, key), fields(location = %key))]
    pub async fn remove_history_entry(&self, key: &LocationKey) -> Removal {
        let next = {
            let mut inner = self.inner.lock();
            if inner.state.history.remove(key).is_none() {
                debug!("No history entry to remove");
                return Removal::NotPresent;
            }
            if inner.state.current_location.as_ref() != Some(key) {
                return Removal::Removed;
            }

            let first = inner.state.history.first().map(|e| e.location_key.clone());
            let Some(first) = first else {
                // Invalidate whatever is still in flight for the removed key
                inner.next_token();
                inner.state.reset_display();
                info!("History emptied, back to idle");
                return Removal::Reset;
            };
            first
        };

        info!(next = %next, "Current location removed, selecting first remaining entry");
        let outcome = self.lookup(next.clone()).await;
        Removal::Reselected {
            location: next,
            outcome,
        }
    }

    /// Run one lookup end to end: begin, call the gateway, complete
    #[instrument(skip(self, key), fields(location = %key))]
    pub async fn lookup(&self, key: LocationKey) -> LookupOutcome {
        let ticket = self.begin_lookup(key);

        let result = tokio::time::timeout(
            self.config.lookup_timeout,
            self.weather.current_weather(&ticket.location),
        )
        .await
        .unwrap_or_else(|_| Err(ApplicationError::Timeout(self.config.lookup_timeout)));

        self.complete_lookup(&ticket, result)
    }

    /// Mark `key` as the current target and enter `Loading`.
    ///
    /// Any lookup begun earlier is superseded from this point on.
    pub fn begin_lookup(&self, key: LocationKey) -> LookupTicket {
        let mut inner = self.inner.lock();
        let token = inner.next_token();
        inner.state.current_location = Some(key.clone());
        inner.state.is_loading = true;
        inner.state.last_error = None;
        debug!(token = token.0, location = %key, "Lookup started");
        LookupTicket {
            token,
            location: key,
        }
    }

    /// Apply the gateway result for `ticket` unless it has been superseded
    pub fn complete_lookup(
        &self,
        ticket: &LookupTicket,
        result: Result<WeatherSnapshot, ApplicationError>,
    ) -> LookupOutcome {
        let mut inner = self.inner.lock();
        if inner.latest != Some(ticket.token) {
            debug!(
                token = ticket.token.0,
                location = %ticket.location,
                "Discarding superseded lookup result"
            );
            return LookupOutcome::Superseded;
        }

        let state = &mut inner.state;
        state.is_loading = false;
        match result {
            Ok(snapshot) => {
                if !state.history.contains(&ticket.location) {
                    state.history.append(HistoryEntry::new(
                        ticket.location.clone(),
                        snapshot.country_code.clone(),
                        self.clock.now(),
                    ));
                }
                info!(
                    location = %ticket.location,
                    temperature = snapshot.temperature_c,
                    "Weather loaded"
                );
                state.current_snapshot = Some(snapshot);
                state.last_error = None;
                LookupOutcome::Loaded
            },
            Err(err) => {
                warn!(location = %ticket.location, error = %err, "Weather lookup failed");
                let failure = classify_lookup_error(&err);
                state.current_snapshot = None;
                state.last_error = Some(failure);
                LookupOutcome::Failed(failure)
            },
        }
    }
}
