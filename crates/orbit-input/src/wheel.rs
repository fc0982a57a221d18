//! Wheel events in browser convention: positive `delta_y` scrolls the page down.

use serde::{Deserialize, Serialize};
use winit::event::MouseScrollDelta;

/// Pixels per scroll line when converting winit line deltas.
///
/// Matches the usual ~40 px per notch on desktop platforms.
pub const LINE_HEIGHT_PX: f64 = 40.0;

/// Which way the user scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// `Down` for a strictly positive delta, `Up` otherwise (including NaN).
    #[must_use]
    pub fn from_delta_y(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        }
    }
}

/// A single wheel event stamped with a monotonic clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    /// Vertical delta in pixels; positive scrolls down.
    pub delta_y: f64,
    /// Milliseconds on a monotonic clock.
    pub timestamp_ms: u64,
}

impl WheelEvent {
    #[must_use]
    pub fn new(delta_y: f64, timestamp_ms: u64) -> Self {
        Self {
            delta_y,
            timestamp_ms,
        }
    }

    /// Convert a winit `MouseWheel` delta.
    ///
    /// winit reports positive y when scrolling up, so the sign flips.
    #[must_use]
    pub fn from_winit(delta: MouseScrollDelta, timestamp_ms: u64) -> Self {
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_x, y) => -f64::from(y) * LINE_HEIGHT_PX,
            MouseScrollDelta::PixelDelta(pos) => -pos.y,
        };
        Self::new(delta_y, timestamp_ms)
    }

    #[must_use]
    pub fn direction(&self) -> ScrollDirection {
        ScrollDirection::from_delta_y(self.delta_y)
    }
}

/// A recorded sequence of wheel events, replayable without a window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelRecording {
    pub events: Vec<WheelEvent>,
}

impl WheelRecording {
    /// Index of the first event stamped earlier than the one before it.
    #[must_use]
    pub fn first_out_of_order(&self) -> Option<usize> {
        self.events
            .windows(2)
            .position(|w| w[1].timestamp_ms < w[0].timestamp_ms)
            .map(|i| i + 1)
    }

    /// Span between first and last event, zero when fewer than two events.
    #[must_use]
    pub fn span_ms(&self) -> u64 {
        match (self.events.first(), self.events.last()) {
            (Some(first), Some(last)) => last.timestamp_ms.saturating_sub(first.timestamp_ms),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(ScrollDirection::from_delta_y(5.0), ScrollDirection::Down);
        assert_eq!(ScrollDirection::from_delta_y(-3.0), ScrollDirection::Up);
        assert_eq!(ScrollDirection::from_delta_y(0.0), ScrollDirection::Up);
        assert_eq!(ScrollDirection::from_delta_y(f64::NAN), ScrollDirection::Up);
    }

    #[test]
    fn test_line_delta_flips_and_scales() {
        let ev = WheelEvent::from_winit(MouseScrollDelta::LineDelta(0.0, -1.0), 10);
        assert!((ev.delta_y - LINE_HEIGHT_PX).abs() < f64::EPSILON);
        assert_eq!(ev.direction(), ScrollDirection::Down);
        assert_eq!(ev.timestamp_ms, 10);
    }

    #[test]
    fn test_pixel_delta_flips() {
        let ev = WheelEvent::from_winit(
            MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 12.0)),
            0,
        );
        assert!((ev.delta_y + 12.0).abs() < f64::EPSILON);
        assert_eq!(ev.direction(), ScrollDirection::Up);
    }

    #[test]
    fn test_recording_monotonic_and_span() {
        let rec = WheelRecording {
            events: vec![
                WheelEvent::new(5.0, 0),
                WheelEvent::new(5.0, 500),
                WheelEvent::new(5.0, 2100),
            ],
        };
        assert_eq!(rec.first_out_of_order(), None);
        assert_eq!(rec.span_ms(), 2100);

        let backwards = WheelRecording {
            events: vec![
                WheelEvent::new(1.0, 10),
                WheelEvent::new(1.0, 10),
                WheelEvent::new(1.0, 5),
            ],
        };
        assert_eq!(backwards.first_out_of_order(), Some(2));
        assert_eq!(backwards.span_ms(), 0);
    }

    #[test]
    fn test_recording_parses_from_ron() {
        let text = "(events: [(delta_y: 5.0, timestamp_ms: 0), (delta_y: -2.0, timestamp_ms: 2500)])";
        let rec: WheelRecording = ron::from_str(text).unwrap();
        assert_eq!(rec.events.len(), 2);
        assert_eq!(rec.events[1].direction(), ScrollDirection::Up);
    }
}
