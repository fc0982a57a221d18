//! Scroll-driven carousel: turns raw wheel events into a throttled four-phase
//! cycle of group rotations and heading shifts.
//!
//! The controller owns its state and talks to the scene only through
//! [`orbit_animation::AnimationTarget`], so it runs the same against a live
//! renderer, a replay log, or a recording fake.

mod controller;
mod settings;

pub use controller::{ScrollCycleController, ScrollOutcome};
pub use settings::{CYCLE_LENGTH, SettingsError, ScrollSettings, THROTTLE_DELAY_MS};
