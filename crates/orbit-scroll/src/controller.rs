//! The throttled scroll-to-cycle state machine.

use orbit_animation::{AnimationTarget, Axis};
use orbit_input::{ScrollDirection, WheelEvent};
use tracing::{info, trace};

use crate::settings::ScrollSettings;

/// What a single wheel event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Arrived inside the throttle window; nothing was requested.
    Dropped {
        /// Milliseconds since the last fired transition, zero for out-of-order events.
        elapsed_ms: u64,
    },
    /// A transition fired.
    Fired {
        /// Cycle index after advancing.
        cycle_index: u32,
        /// Scroll direction of the event. Does not influence the requests.
        direction: ScrollDirection,
        /// Whether the headings were also sent back to their start.
        reset: bool,
    },
}

impl ScrollOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, ScrollOutcome::Fired { .. })
    }
}

/// Converts wheel events into a throttled cycle of scene transitions.
///
/// State is the time of the last fired transition and the cycle index in
/// `[0, cycle_length)`, starting at 0. An event fires when more than the
/// throttle delay has passed since the previous firing; the first event ever
/// always fires. Each firing advances the index by one, shifts the headings up
/// by one step and turns the planet group by one step about Y. Landing back on
/// index 0 also snaps the headings to their start.
#[derive(Debug, Clone)]
pub struct ScrollCycleController {
    settings: ScrollSettings,
    last_trigger_ms: Option<u64>,
    cycle_index: u32,
    fired_count: u64,
}

impl ScrollCycleController {
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings,
            last_trigger_ms: None,
            cycle_index: 0,
            fired_count: 0,
        }
    }

    /// Handle one wheel event, issuing animation requests to `target` if it
    /// passes the throttle.
    ///
    /// Timestamps are expected to come from a monotonic clock. An event older
    /// than the last firing counts as zero elapsed time and is dropped.
    pub fn handle_wheel_event<T>(&mut self, event: WheelEvent, target: &mut T) -> ScrollOutcome
    where
        T: AnimationTarget + ?Sized,
    {
        if let Some(last) = self.last_trigger_ms {
            let elapsed_ms = event.timestamp_ms.saturating_sub(last);
            if elapsed_ms <= self.settings.throttle_delay_ms {
                trace!(elapsed_ms, "wheel event throttled");
                return ScrollOutcome::Dropped { elapsed_ms };
            }
        }

        self.last_trigger_ms = Some(event.timestamp_ms);
        let direction = event.direction();
        self.cycle_index = (self.cycle_index + 1) % self.settings.cycle_length();
        self.fired_count += 1;
        info!(cycle_index = self.cycle_index, ?direction, "Scroll count: {}", self.cycle_index);

        let tween = self.settings.tween;
        target.translate_by(-self.settings.heading_step_percent, tween);
        target.rotate_by(Axis::Y, -self.settings.group_step, tween);

        let reset = self.cycle_index == 0;
        if reset {
            target.set_translation(0.0, tween);
        }

        ScrollOutcome::Fired {
            cycle_index: self.cycle_index,
            direction,
            reset,
        }
    }

    pub fn cycle_index(&self) -> u32 {
        self.cycle_index
    }

    /// Timestamp of the last fired transition, `None` before the first.
    pub fn last_trigger_ms(&self) -> Option<u64> {
        self.last_trigger_ms
    }

    /// Transitions fired since construction.
    pub fn fired_count(&self) -> u64 {
        self.fired_count
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }

    /// Swap in new settings, keeping the throttle clock. The cycle index is
    /// folded into the new cycle length.
    pub fn set_settings(&mut self, settings: ScrollSettings) {
        self.cycle_index %= settings.cycle_length();
        self.settings = settings;
    }
}

impl Default for ScrollCycleController {
    fn default() -> Self {
        Self::new(ScrollSettings::default())
    }
}
