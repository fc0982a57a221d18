//! The renderer-facing animation capability and two implementations of it.

use glam::Vec3;
use tracing::debug;

use crate::request::{AnimationRequest, Axis, Offset, Tween};

/// Capability the scroll interaction needs from whatever draws the scene.
///
/// Every call starts an animation and returns immediately; overlapping
/// animations on the same property are the backend's business.
pub trait AnimationTarget {
    /// Rotate the orbiting group by `radians` relative to its current angle.
    fn rotate_by(&mut self, axis: Axis, radians: f32, tween: Tween);

    /// Move the headings by `percent` of their own height, relative to their
    /// current offset.
    fn translate_by(&mut self, percent: f32, tween: Tween);

    /// Move the headings to an absolute offset in percent.
    fn set_translation(&mut self, percent: f32, tween: Tween);

}

impl<T: AnimationTarget + ?Sized> AnimationTarget for &mut T {
    fn rotate_by(&mut self, axis: Axis, radians: f32, tween: Tween) {
        (**self).rotate_by(axis, radians, tween);
    }

    fn translate_by(&mut self, percent: f32, tween: Tween) {
        (**self).translate_by(percent, tween);
    }

    fn set_translation(&mut self, percent: f32, tween: Tween) {
        (**self).set_translation(percent, tween);
    }
}

// ---------------------------------------------------------------------------
// RecordingTarget
// ---------------------------------------------------------------------------

/// Records every request in call order. Useful in tests and for replay logs.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    requests: Vec<AnimationRequest>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[AnimationRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Number of absolute heading resets recorded.
    pub fn reset_count(&self) -> usize {
        self.requests.iter().filter(|r| r.is_heading_reset()).count()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<AnimationRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl AnimationTarget for RecordingTarget {
    fn rotate_by(&mut self, axis: Axis, radians: f32, tween: Tween) {
        self.requests.push(AnimationRequest::RotateGroup {
            axis,
            radians,
            tween,
        });
    }

    fn translate_by(&mut self, percent: f32, tween: Tween) {
        self.requests.push(AnimationRequest::TranslateHeadings {
            offset: Offset::Relative(percent),
            tween,
        });
    }

    fn set_translation(&mut self, percent: f32, tween: Tween) {
        self.requests.push(AnimationRequest::TranslateHeadings {
            offset: Offset::Absolute(percent),
            tween,
        });
    }
}

// ---------------------------------------------------------------------------
// AnimatedScene
// ---------------------------------------------------------------------------

/// Tracks where each animated property of the scene will settle.
///
/// Requests are resolved against the pending end value, so two overlapping
/// relative requests accumulate the way the backend's relative tweens do.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedScene {
    /// Target Euler rotation of the orbiting group, in radians.
    group_rotation: Vec3,
    /// Target heading offset in percent of heading height.
    heading_offset: f32,
    /// Requests applied since creation.
    applied: u64,
}

impl AnimatedScene {
    /// Start from a group already tilted by `initial_rotation`.
    pub fn new(initial_rotation: Vec3) -> Self {
        Self {
            group_rotation: initial_rotation,
            heading_offset: 0.0,
            applied: 0,
        }
    }

    pub fn group_rotation(&self) -> Vec3 {
        self.group_rotation
    }

    pub fn heading_offset(&self) -> f32 {
        self.heading_offset
    }

    pub fn applied(&self) -> u64 {
        self.applied
    }

    fn rotate(&mut self, axis: Axis, offset: Offset) {
        let i = axis.index();
        self.group_rotation[i] = offset.resolve(self.group_rotation[i]);
        self.applied += 1;
    }

    fn translate(&mut self, offset: Offset) {
        self.heading_offset = offset.resolve(self.heading_offset);
        self.applied += 1;
    }
}

impl Default for AnimatedScene {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl AnimationTarget for AnimatedScene {
    fn rotate_by(&mut self, axis: Axis, radians: f32, tween: Tween) {
        self.rotate(axis, Offset::Relative(radians));
        debug!(
            ?axis,
            radians,
            duration = tween.duration_secs,
            ease = %tween.ease,
            target = self.group_rotation[axis.index()],
            "group rotation"
        );
    }

    fn translate_by(&mut self, percent: f32, tween: Tween) {
        self.translate(Offset::Relative(percent));
        debug!(
            percent,
            duration = tween.duration_secs,
            ease = %tween.ease,
            target = self.heading_offset,
            "heading shift"
        );
    }

    fn set_translation(&mut self, percent: f32, tween: Tween) {
        self.translate(Offset::Absolute(percent));
        debug!(
            percent,
            duration = tween.duration_secs,
            ease = %tween.ease,
            "heading reset"
        );
    }
}
