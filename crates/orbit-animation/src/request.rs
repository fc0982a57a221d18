//! Animation requests as issued to the renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ease::Ease;

/// Rotation axis of a scene group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index into an `(x, y, z)` triple.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Where an animated property should end up.
///
/// Relative offsets are applied to whatever value the property holds when the
/// tween starts; absolute offsets replace it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Offset {
    Relative(f32),
    Absolute(f32),
}

impl Offset {
    /// End value of a property currently at `current`.
    pub fn resolve(self, current: f32) -> f32 {
        match self {
            Offset::Relative(delta) => current + delta,
            Offset::Absolute(value) => value,
        }
    }

    pub fn is_relative(self) -> bool {
        matches!(self, Offset::Relative(_))
    }
}

/// Renders the backend encoding: `-=1.5`, `+=2`, or a bare absolute value.
impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Offset::Relative(delta) if delta < 0.0 => write!(f, "-={}", -delta),
            Offset::Relative(delta) => write!(f, "+={delta}"),
            Offset::Absolute(value) => write!(f, "{value}"),
        }
    }
}

/// Timing of a single animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    /// Duration in seconds.
    pub duration_secs: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(duration_secs: f32, ease: Ease) -> Self {
        Self {
            duration_secs,
            ease,
        }
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(1.0, Ease::Power2InOut)
    }
}

/// One request sent to the animation backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimationRequest {
    /// Rotate the orbiting group about `axis` by `radians`, always relative.
    RotateGroup {
        axis: Axis,
        radians: f32,
        tween: Tween,
    },
    /// Move the heading elements vertically, offset in percent of their own height.
    TranslateHeadings { offset: Offset, tween: Tween },
}

impl AnimationRequest {
    pub fn tween(&self) -> Tween {
        match *self {
            AnimationRequest::RotateGroup { tween, .. }
            | AnimationRequest::TranslateHeadings { tween, .. } => tween,
        }
    }

    pub fn offset(&self) -> Offset {
        match *self {
            AnimationRequest::RotateGroup { radians, .. } => Offset::Relative(radians),
            AnimationRequest::TranslateHeadings { offset, .. } => offset,
        }
    }

    /// Whether this request snaps the headings back to an absolute position.
    pub fn is_heading_reset(&self) -> bool {
        matches!(
            self,
            AnimationRequest::TranslateHeadings {
                offset: Offset::Absolute(_),
                ..
            }
        )
    }
}

impl fmt::Display for AnimationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationRequest::RotateGroup {
                axis,
                radians,
                tween,
            } => write!(
                f,
                "group.rotation.{} {} over {}s ({})",
                match axis {
                    Axis::X => "x",
                    Axis::Y => "y",
                    Axis::Z => "z",
                },
                Offset::Relative(*radians),
                tween.duration_secs,
                tween.ease
            ),
            AnimationRequest::TranslateHeadings { offset, tween } => {
                let unit = match offset {
                    Offset::Relative(_) => "%",
                    Offset::Absolute(_) => "",
                };
                write!(
                    f,
                    "headings.y {offset}{unit} over {}s ({})",
                    tween.duration_secs, tween.ease
                )
            }
        }
    }
}
