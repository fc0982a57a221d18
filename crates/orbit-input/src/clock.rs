//! Millisecond clock for stamping input events.

use std::time::Instant;

/// Monotonic milliseconds since the clock was created.
///
/// Readings never decrease, which the scroll throttle relies on.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since creation.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.since(Instant::now())
    }

    /// Milliseconds between creation and `instant`, zero if `instant` is earlier.
    #[must_use]
    pub fn since(&self, instant: Instant) -> u64 {
        let elapsed = instant.saturating_duration_since(self.origin);
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
