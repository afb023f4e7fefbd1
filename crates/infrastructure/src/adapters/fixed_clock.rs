//! Clock that always reports the same instant.

use chrono::{DateTime, Utc};
use postbuild_application::ports::Clock;

/// Clock frozen at a single instant, for reproducible documents.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Creates a clock frozen at `millis` since the Unix epoch.
    ///
    /// Out-of-range values clamp to the epoch.
    #[must_use]
    pub fn at_millis(millis: i64) -> Self {
        Self::new(DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
