//! Domain layer for the weather lookup
//!
//! Holds the location key normalizer, weather snapshots and the session's
//! search history. Nothing in here performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
