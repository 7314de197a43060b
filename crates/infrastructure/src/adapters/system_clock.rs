//! Wall clock - Implements ClockPort with the system time

use application::ClockPort;
use chrono::{DateTime, Utc};

/// Clock backed by `Utc::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
