//! Application layer - Use cases and orchestration
//!
//! Turns user intent (submit, revisit, delete) into weather lookups and keeps
//! the session state consistent. Talks to the outside world only through
//! the ports defined here.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
