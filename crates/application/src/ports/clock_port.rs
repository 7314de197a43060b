//! Wall-clock port

use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

/// Source of the current time, used to stamp history entries
#[cfg_attr(test, automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
