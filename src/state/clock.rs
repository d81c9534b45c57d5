// Wall-clock source for segment timestamps.
// The tracker reads "now" through this trait so sessions can be replayed in tests.

use chrono::{DateTime, Local};

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use std::cell::Cell;

    use chrono::{DateTime, Duration, Local};

    use super::Clock;

    /// Clock that only moves when told to.
    #[derive(Debug)]
    pub struct ManualClock {
        now: Cell<DateTime<Local>>,
    }

    impl ManualClock {
        pub fn new(start: DateTime<Local>) -> Self {
            Self {
                now: Cell::new(start),
            }
        }

        pub fn advance(&self, seconds: i64) {
            self.now.set(self.now.get() + Duration::seconds(seconds));
        }

        pub fn advance_millis(&self, millis: i64) {
            self.now.set(self.now.get() + Duration::milliseconds(millis));
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Local> {
            self.now.get()
        }
    }
}
