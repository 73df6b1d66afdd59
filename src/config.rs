//! Carousel tunables.

use crate::error::{CarouselError, Result};
use crate::layout::Breakpoints;

/// Timing, gesture and layout settings for a carousel.
///
/// All fields have defaults matching the stock category carousel, so a
/// config file only needs the values it changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Milliseconds between automatic slide changes
    pub auto_advance_ms: u64,
    /// Milliseconds between automatic direction reversals
    pub direction_flip_ms: u64,
    /// Minimum horizontal travel, in pixels, for a touch to count as a swipe
    pub swipe_threshold: f64,
    /// Gap between cards added to the measured card width, in pixels
    pub card_gap: f64,
    /// Container widths deciding how many cards are visible
    pub breakpoints: Breakpoints,
    /// CSS `transition` value used for animated track moves
    pub transition: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: 3000,
            direction_flip_ms: 6000,
            swipe_threshold: 50.0,
            card_gap: 20.0,
            breakpoints: Breakpoints::default(),
            transition: "transform 0.5s ease-in-out".to_string(),
        }
    }
}

impl CarouselConfig {
    /// Parse a TOML document into a config, filling missing fields with defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<()> {
        if self.auto_advance_ms == 0 {
            return Err(CarouselError::invalid_config("auto-advance interval must be non-zero"));
        }
        if self.direction_flip_ms == 0 {
            return Err(CarouselError::invalid_config("direction-flip interval must be non-zero"));
        }
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold >= 0.0) {
            return Err(CarouselError::invalid_config("swipe threshold must be a non-negative number"));
        }
        if !(self.card_gap.is_finite() && self.card_gap >= 0.0) {
            return Err(CarouselError::invalid_config("card gap must be a non-negative number"));
        }
        self.breakpoints.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CarouselConfig::default();
        assert_eq!(config.auto_advance_ms, 3000);
        assert_eq!(config.direction_flip_ms, 6000);
        assert_eq!(config.swipe_threshold, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_intervals() {
        let config = CarouselConfig {
            auto_advance_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CarouselError::InvalidConfig { .. })));

        let config = CarouselConfig {
            direction_flip_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_threshold() {
        let config = CarouselConfig {
            swipe_threshold: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parses_partial_toml() {
        let config = CarouselConfig::from_toml_str(
            r#"
            auto_advance_ms = 4000

            [breakpoints]
            single_below = 600.0
            "#,
        )
        .unwrap();
        assert_eq!(config.auto_advance_ms, 4000);
        assert_eq!(config.direction_flip_ms, 6000);
        assert_eq!(config.breakpoints.single_below, 600.0);
        assert_eq!(config.breakpoints.double_below, 992.0);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_errors_surface() {
        assert!(matches!(
            CarouselConfig::from_toml_str("auto_advance_ms = \"soon\""),
            Err(CarouselError::Toml(_))
        ));
        assert!(matches!(
            CarouselConfig::from_toml_str("auto_advance_ms = 0"),
            Err(CarouselError::InvalidConfig { .. })
        ));
    }
}
