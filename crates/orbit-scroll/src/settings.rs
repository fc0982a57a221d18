//! Tunables of the scroll cycle.

use std::f32::consts::FRAC_PI_2;

use orbit_animation::{Ease, Tween, UnknownEase};
use orbit_config::ScrollConfig;

/// Minimum milliseconds between two fired transitions.
pub const THROTTLE_DELAY_MS: u64 = 2000;

/// Number of phases before the cycle wraps back to its start.
pub const CYCLE_LENGTH: u32 = 4;

/// Rejected scroll configuration.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cycle length must be at least 1")]
    ZeroCycle,

    #[error("transition duration must be finite and non-negative, got {0}")]
    BadDuration(f32),

    #[error(transparent)]
    Ease(#[from] UnknownEase),
}

/// Validated scroll cycle parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSettings {
    pub throttle_delay_ms: u64,
    /// Always at least 1.
    cycle_length: u32,
    /// Timing shared by every request of a transition.
    pub tween: Tween,
    /// Group yaw decrement per transition, radians.
    pub group_step: f32,
    /// Heading decrement per transition, percent of heading height.
    pub heading_step_percent: f32,
}

impl ScrollSettings {
    pub fn new(
        throttle_delay_ms: u64,
        cycle_length: u32,
        tween: Tween,
        group_step: f32,
        heading_step_percent: f32,
    ) -> Result<Self, SettingsError> {
        if cycle_length == 0 {
            return Err(SettingsError::ZeroCycle);
        }
        if !tween.duration_secs.is_finite() || tween.duration_secs < 0.0 {
            return Err(SettingsError::BadDuration(tween.duration_secs));
        }
        Ok(Self {
            throttle_delay_ms,
            cycle_length,
            tween,
            group_step,
            heading_step_percent,
        })
    }

    /// Build from the `scroll` section of the config file.
    pub fn from_config(config: &ScrollConfig) -> Result<Self, SettingsError> {
        let ease: Ease = config.ease.parse()?;
        Self::new(
            config.throttle_delay_ms,
            config.cycle_length,
            Tween::new(config.transition_secs, ease),
            config.group_step,
            config.heading_step_percent,
        )
    }

    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            throttle_delay_ms: THROTTLE_DELAY_MS,
            cycle_length: CYCLE_LENGTH,
            tween: Tween::new(1.0, Ease::Power2InOut),
            group_step: FRAC_PI_2,
            heading_step_percent: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_defaults() {
        let from_config = ScrollSettings::from_config(&ScrollConfig::default()).unwrap();
        assert_eq!(from_config, ScrollSettings::default());
    }

    #[test]
    fn test_zero_cycle_rejected() {
        let config = ScrollConfig {
            cycle_length: 0,
            ..ScrollConfig::default()
        };
        assert!(matches!(
            ScrollSettings::from_config(&config),
            Err(SettingsError::ZeroCycle)
        ));
    }

    #[test]
    fn test_unknown_ease_rejected() {
        let config = ScrollConfig {
            ease: "elastic.out".to_string(),
            ..ScrollConfig::default()
        };
        let err = ScrollSettings::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("elastic.out"));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let result = ScrollSettings::new(2000, 4, Tween::new(-1.0, Ease::Linear), 1.0, 100.0);
        assert!(matches!(result, Err(SettingsError::BadDuration(_))));
    }
}
