//! Named easing curves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An easing curve, identified by the name the animation backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Quadratic ease-in-out.
    #[default]
    Power2InOut,
    /// Exponential ease-in-out.
    ExpoInOut,
}

/// Returned when parsing an easing name the backend does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing curve: {0:?}")]
pub struct UnknownEase(pub String);

impl Ease {
    /// All curves, in declaration order.
    pub const ALL: [Ease; 3] = [Ease::Linear, Ease::Power2InOut, Ease::ExpoInOut];

    /// Backend name of the curve.
    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "none",
            Ease::Power2InOut => "power2.inOut",
            Ease::ExpoInOut => "expo.inOut",
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = UnknownEase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ease::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(trimmed))
            .or(match trimmed {
                "linear" => Some(Ease::Linear),
                // Older backend spelling.
                "expo.easeInOut" => Some(Ease::ExpoInOut),
                _ => None,
            })
            .ok_or_else(|| UnknownEase(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for ease in Ease::ALL {
            assert_eq!(ease.name().parse::<Ease>(), Ok(ease));
        }
    }

    #[test]
    fn test_default_is_power2() {
        assert_eq!(Ease::default(), Ease::Power2InOut);
        assert_eq!(Ease::default().to_string(), "power2.inOut");
    }

    #[test]
    fn test_aliases() {
        assert_eq!("linear".parse::<Ease>(), Ok(Ease::Linear));
        assert_eq!("expo.easeInOut".parse::<Ease>(), Ok(Ease::ExpoInOut));
        assert_eq!(" POWER2.INOUT ".parse::<Ease>(), Ok(Ease::Power2InOut));
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "bounce.out".parse::<Ease>().unwrap_err();
        assert_eq!(err, UnknownEase("bounce.out".to_string()));
        assert!(err.to_string().contains("bounce.out"));
    }
}
