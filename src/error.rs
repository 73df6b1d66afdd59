//! Error types for carousel construction and configuration.

use thiserror::Error;

/// Errors surfaced by the carousel.
///
/// Runtime inputs such as out-of-range slide indices are clamped rather than
/// reported, so these only come out of construction, configuration and
/// metrics validation.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// The card set has no cards, so there is no slide count to work with.
    #[error("card set is empty")]
    EmptyCardSet,

    /// The card width has not been measured yet (or measured as zero).
    #[error("viewport metrics unavailable: card width {card_width}")]
    MetricsUnavailable { card_width: f64 },

    /// A configuration value is out of its allowed range.
    #[error("invalid carousel config: {reason}")]
    InvalidConfig { reason: String },

    /// A TOML configuration document failed to parse.
    #[cfg(feature = "toml")]
    #[error("failed to parse carousel config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CarouselError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        CarouselError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CarouselError>;
