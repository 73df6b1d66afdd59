//! Responsive layout calculations for fitting cards into the viewport.

use crate::error::{CarouselError, Result};

/// Container width breakpoints that decide how many cards are visible.
///
/// Widths below `single_below` show one card, widths below `double_below`
/// show two, anything wider shows three.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Breakpoints {
    /// Widths strictly below this show a single card
    pub single_below: f64,
    /// Widths strictly below this (and not below `single_below`) show two cards
    pub double_below: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            single_below: 576.0,
            double_below: 992.0,
        }
    }
}

impl Breakpoints {
    /// Largest number of cards any breakpoint shows.
    pub const MAX_CARDS_PER_VIEW: usize = 3;

    /// Number of cards visible at once for the given container width.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use category_carousel::Breakpoints;
    ///
    /// let bp = Breakpoints::default();
    /// assert_eq!(bp.cards_per_view(375.0), 1);
    /// assert_eq!(bp.cards_per_view(768.0), 2);
    /// assert_eq!(bp.cards_per_view(1440.0), 3);
    /// ```
    pub fn cards_per_view(&self, container_width: f64) -> usize {
        if container_width < self.single_below {
            1
        } else if container_width < self.double_below {
            2
        } else {
            Self::MAX_CARDS_PER_VIEW
        }
    }

    /// Check that both breakpoints are positive and ordered.
    pub fn validate(&self) -> Result<()> {
        if !(self.single_below.is_finite() && self.single_below > 0.0) {
            return Err(CarouselError::invalid_config("single-card breakpoint must be positive"));
        }
        if !(self.double_below.is_finite() && self.double_below > self.single_below) {
            return Err(CarouselError::invalid_config(
                "two-card breakpoint must be greater than the single-card breakpoint",
            ));
        }
        Ok(())
    }
}

/// Measured facts about the viewport, supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportMetrics {
    /// Width of one card including the gap to its neighbour, in pixels
    pub card_width: f64,
    /// Width of the window or container the carousel lives in, in pixels
    pub container_width: f64,
}

impl ViewportMetrics {
    /// Create metrics from an already gap-inclusive card width.
    pub fn new(card_width: f64, container_width: f64) -> Self {
        Self {
            card_width,
            container_width,
        }
    }

    /// Create metrics from a measured card box width plus the gap between cards.
    pub fn measured(card_offset_width: f64, gap: f64, container_width: f64) -> Self {
        Self::new(card_offset_width + gap, container_width)
    }

    /// Whether the card width is usable for positioning.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.card_width.is_finite() && self.card_width > 0.0
    }

    /// Fail with [`CarouselError::MetricsUnavailable`] when the card width is unusable.
    pub fn validate(&self) -> Result<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(CarouselError::MetricsUnavailable {
                card_width: self.card_width,
            })
        }
    }
}

/// Number of slides needed to show `card_count` cards `cards_per_view` at a time.
///
/// This is `ceil(card_count / cards_per_view)`; a zero `cards_per_view` is
/// treated as one.
#[inline]
pub fn slide_count(card_count: usize, cards_per_view: usize) -> usize {
    card_count.div_ceil(cards_per_view.max(1))
}

/// Horizontal track offset in pixels for a slide position.
///
/// The offset advances a whole view per slide: `position * cards_per_view * card_width`.
#[inline]
pub fn track_offset(position: usize, cards_per_view: usize, card_width: f64) -> f64 {
    position as f64 * cards_per_view as f64 * card_width
}
