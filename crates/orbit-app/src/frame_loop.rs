//! Variable-rate frame driver.
//!
//! The scene advances once per rendered frame with the total time since
//! start, so there is no fixed simulation step. Frames are counted and
//! unusually long ones are reported.

use std::time::Instant;
use tracing::warn;

/// Frames longer than this are logged as hitches.
pub const SLOW_FRAME_SECS: f32 = 0.25;

/// Timing handed to the per-frame callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the loop started.
    pub elapsed_secs: f32,
    /// Seconds since the previous frame.
    pub delta_secs: f32,
}

/// Tracks frame timing from a fixed start instant.
pub struct FrameLoop {
    start: Instant,
    previous: Instant,
    frame_count: u64,
}

impl FrameLoop {
    /// Creates a new `FrameLoop` starting from the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            previous: start,
            frame_count: 0,
        }
    }

    /// Runs one frame at the current instant.
    pub fn tick(&mut self, frame_fn: impl FnMut(FrameTime)) {
        self.tick_at(Instant::now(), frame_fn);
    }

    /// Runs one frame at `now`. Instants before the previous frame count as
    /// zero delta.
    pub fn tick_at(&mut self, now: Instant, mut frame_fn: impl FnMut(FrameTime)) {
        let delta_secs = now.saturating_duration_since(self.previous).as_secs_f32();
        if delta_secs > SLOW_FRAME_SECS {
            warn!(
                "Frame time {:.1}ms exceeds {:.1}ms",
                delta_secs * 1000.0,
                SLOW_FRAME_SECS * 1000.0
            );
        }
        self.previous = self.previous.max(now);

        let elapsed_secs = self.previous.duration_since(self.start).as_secs_f32();
        frame_fn(FrameTime {
            elapsed_secs,
            delta_secs,
        });
        self.frame_count += 1;
    }

    /// Returns the total number of frames run.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Seconds between start and the latest frame.
    pub fn elapsed_secs(&self) -> f32 {
        self.previous.duration_since(self.start).as_secs_f32()
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_elapsed_and_delta() {
        let start = Instant::now();
        let mut fl = FrameLoop::starting_at(start);
        let mut seen = Vec::new();
        for ms in [16u64, 33, 50] {
            fl.tick_at(start + Duration::from_millis(ms), |t| seen.push(t));
        }
        assert_eq!(fl.frame_count(), 3);
        assert!((seen[0].elapsed_secs - 0.016).abs() < 1e-6);
        assert!((seen[1].delta_secs - 0.017).abs() < 1e-6);
        assert!((seen[2].elapsed_secs - 0.050).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_instant_is_zero_delta() {
        let start = Instant::now();
        let mut fl = FrameLoop::starting_at(start);
        fl.tick_at(start + Duration::from_millis(100), |_| {});
        let mut last = None;
        fl.tick_at(start + Duration::from_millis(50), |t| last = Some(t));
        let t = last.unwrap();
        assert_eq!(t.delta_secs, 0.0);
        assert!((t.elapsed_secs - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_first_frame_at_start() {
        let start = Instant::now();
        let mut fl = FrameLoop::starting_at(start);
        let mut got = None;
        fl.tick_at(start, |t| got = Some(t));
        assert_eq!(
            got,
            Some(FrameTime {
                elapsed_secs: 0.0,
                delta_secs: 0.0
            })
        );
    }

    #[test]
    fn test_default_starts_empty() {
        let fl = FrameLoop::default();
        assert_eq!(fl.frame_count(), 0);
    }
}
