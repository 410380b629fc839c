//! Time source for rendered values
//!
//! Components never call the system clock directly. They receive a `Clock`
//! so the server uses wall-clock time while tests pin an exact instant.

use chrono::{DateTime, Datelike, Local};

/// Zero-argument "now" provider
pub trait Clock: Send + Sync {
    /// Current instant in the host's local time zone
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time from the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a single instant
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Calendar year of the clock's current local date
///
/// Read fresh on every call, nothing is cached.
pub fn current_year(clock: &dyn Clock) -> i32 {
    clock.now().year()
}
