//! Clock port for time-related operations

use chrono::NaiveDateTime;

/// Port for getting the current local wall-clock time.
///
/// This abstraction allows testing date and time variables by providing
/// a fixed implementation.
pub trait Clock: Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
