//! System clock adapter

use chrono::{Local, NaiveDateTime};
use rendernames_application::ports::Clock;

/// Wall clock in the machine's local time zone.
///
/// Date and time variables are local so folder names match what the artist
/// sees on their own clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
