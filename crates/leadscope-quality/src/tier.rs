//! Three-way classification of quality scores.

use leadscope_core::{validate_tier_thresholds, ConfigError};
use serde::Serialize;

/// Lowest score classified as [`Tier::Excellent`].
pub const EXCELLENT_MIN_SCORE: u8 = 80;
/// Lowest score classified as [`Tier::Okay`].
pub const OKAY_MIN_SCORE: u8 = 50;

/// Quality tier. Ordered so that `Excellent > Okay > Poor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Poor,
    Okay,
    Excellent,
}

impl Tier {
    /// Display order, best first.
    pub const ALL: [Tier; 3] = [Tier::Excellent, Tier::Okay, Tier::Poor];

    /// Human label shown next to a scored lead.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Okay => "Good",
            Tier::Poor => "Basic",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Excellent => write!(f, "excellent"),
            Tier::Okay => write!(f, "okay"),
            Tier::Poor => write!(f, "poor"),
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "excellent" => Ok(Tier::Excellent),
            "okay" | "good" => Ok(Tier::Okay),
            "poor" | "basic" => Ok(Tier::Poor),
            other => Err(format!("unknown tier '{other}'")),
        }
    }
}

/// Lower-inclusive score boundaries for the upper two tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    pub excellent_min: u8,
    pub okay_min: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            excellent_min: EXCELLENT_MIN_SCORE,
            okay_min: OKAY_MIN_SCORE,
        }
    }
}

impl TierThresholds {
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when `okay_min > excellent_min` or
    /// `excellent_min > 100`.
    pub fn new(excellent_min: u8, okay_min: u8) -> Result<Self, ConfigError> {
        validate_tier_thresholds(excellent_min, okay_min)?;
        Ok(Self {
            excellent_min,
            okay_min,
        })
    }

    #[must_use]
    pub fn classify(&self, score: u8) -> Tier {
        if score >= self.excellent_min {
            Tier::Excellent
        } else if score >= self.okay_min {
            Tier::Okay
        } else {
            Tier::Poor
        }
    }
}

/// Classify `score` with the default thresholds.
#[must_use]
pub fn classify(score: u8) -> Tier {
    TierThresholds::default().classify(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_lower_inclusive() {
        assert_eq!(classify(100), Tier::Excellent);
        assert_eq!(classify(80), Tier::Excellent);
        assert_eq!(classify(79), Tier::Okay);
        assert_eq!(classify(50), Tier::Okay);
        assert_eq!(classify(49), Tier::Poor);
        assert_eq!(classify(0), Tier::Poor);
    }

    #[test]
    fn constants_are_pinned() {
        assert_eq!(EXCELLENT_MIN_SCORE, 80);
        assert_eq!(OKAY_MIN_SCORE, 50);
    }

    #[test]
    fn tiers_are_totally_ordered() {
        assert!(Tier::Excellent > Tier::Okay);
        assert!(Tier::Okay > Tier::Poor);
    }

    #[test]
    fn labels_follow_tier() {
        assert_eq!(Tier::Excellent.label(), "Excellent");
        assert_eq!(Tier::Okay.label(), "Good");
        assert_eq!(Tier::Poor.label(), "Basic");
    }

    #[test]
    fn custom_thresholds_shift_boundaries() {
        let strict = TierThresholds::new(90, 60).unwrap();
        assert_eq!(strict.classify(89), Tier::Okay);
        assert_eq!(strict.classify(59), Tier::Poor);
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        assert!(matches!(
            TierThresholds::new(40, 70),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            TierThresholds::new(101, 50),
            Err(ConfigError::Validation(_))
        ));
        assert!(TierThresholds::new(80, 80).is_ok());
    }

    #[test]
    fn parses_tier_names_and_labels() {
        assert_eq!("Excellent".parse::<Tier>(), Ok(Tier::Excellent));
        assert_eq!("good".parse::<Tier>(), Ok(Tier::Okay));
        assert_eq!("poor".parse::<Tier>(), Ok(Tier::Poor));
        assert!("great".parse::<Tier>().is_err());
    }
}
