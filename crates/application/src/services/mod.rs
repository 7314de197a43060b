//! Application services - Use case implementations

mod search_controller;
mod session_state;

pub use search_controller::{
    EventOutcome, LookupOutcome, LookupTicket, Removal, RequestToken, SearchController,
    SearchControllerConfig, ViewEvent,
};
pub use session_state::{LookupFailure, SearchPhase, SessionState, classify_lookup_error};
