//! Animation request vocabulary shared between the scroll interaction and the
//! scene renderer.
//!
//! Nothing here interpolates: requests name an end offset, a duration and an
//! easing curve, and the rendering side owns the tweening.

pub mod ease;
pub mod request;
pub mod target;

pub use ease::{Ease, UnknownEase};
pub use request::{AnimationRequest, Axis, Offset, Tween};
pub use target::{AnimatedScene, AnimationTarget, RecordingTarget};
