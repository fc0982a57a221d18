//! Input abstraction: timestamped wheel events from winit or from a recording.

pub mod clock;
pub mod wheel;

pub use clock::MonotonicClock;
pub use wheel::{LINE_HEIGHT_PX, ScrollDirection, WheelEvent, WheelRecording};
