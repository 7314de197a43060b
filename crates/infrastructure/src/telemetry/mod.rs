//! Log output setup
//!
//! Diagnostics go to stderr so they never interleave with rendered views.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging};
