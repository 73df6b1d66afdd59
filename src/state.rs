//! Slide position state machine.

/// Direction the carousel moves in when auto-advancing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards higher slide indices
    #[default]
    Forward,
    /// Towards lower slide indices
    Backward,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Reverse in place.
    #[inline]
    pub fn toggle(&mut self) {
        *self = self.reversed();
    }
}

/// Outcome of a single position change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Moved to a neighbouring slide
    Moved,
    /// Jumped across the end of the track (last to first or first to last)
    Wrapped,
    /// Position did not change
    Unchanged,
}

impl Step {
    /// Check if the position changed.
    #[inline]
    pub fn changed(self) -> bool {
        self != Step::Unchanged
    }

    /// Check if this step crossed the end of the track.
    #[inline]
    pub fn wrapped(self) -> bool {
        self == Step::Wrapped
    }
}

/// Platform-agnostic carousel position state.
///
/// Holds the slide position, slide count and auto-advance direction and
/// keeps `position < slide_count` at all times. It knows nothing about
/// timers or rendering; see [`CarouselController`](crate::CarouselController)
/// for that.
///
/// ## Example
///
/// ```rust
/// use category_carousel::{CarouselState, Step};
///
/// let mut state = CarouselState::new(3);
/// assert_eq!(state.advance(), Step::Moved);
/// assert_eq!(state.advance(), Step::Moved);
/// assert_eq!(state.position(), 2);
///
/// // The next advance loops back to the start
/// assert_eq!(state.advance(), Step::Wrapped);
/// assert_eq!(state.position(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    /// Current slide index
    position: usize,
    /// Auto-advance direction
    direction: Direction,
    /// Total number of slides, at least one
    slide_count: usize,
}

impl CarouselState {
    /// Create state at slide 0 moving forward. A zero `slide_count` is treated as one.
    pub fn new(slide_count: usize) -> Self {
        Self {
            position: 0,
            direction: Direction::Forward,
            slide_count: slide_count.max(1),
        }
    }

    /// Get the current slide index.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the total number of slides.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the last slide.
    #[inline]
    pub fn last_slide(&self) -> usize {
        self.slide_count - 1
    }

    /// Get the auto-advance direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set the auto-advance direction.
    #[inline]
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Reverse the auto-advance direction without moving.
    pub fn flip_direction(&mut self) {
        self.direction.toggle();
    }

    /// Move one slide forward, wrapping to the first slide from the last.
    pub fn advance(&mut self) -> Step {
        if self.position < self.last_slide() {
            self.position += 1;
            Step::Moved
        } else if self.slide_count == 1 {
            Step::Unchanged
        } else {
            self.position = 0;
            Step::Wrapped
        }
    }

    /// Move one slide back, wrapping to the last slide from the first.
    pub fn retreat(&mut self) -> Step {
        if self.position > 0 {
            self.position -= 1;
            Step::Moved
        } else if self.slide_count == 1 {
            Step::Unchanged
        } else {
            self.position = self.last_slide();
            Step::Wrapped
        }
    }

    /// Move one slide in the current direction.
    pub fn step(&mut self) -> Step {
        match self.direction {
            Direction::Forward => self.advance(),
            Direction::Backward => self.retreat(),
        }
    }

    /// Jump to a slide, clamping the index into `[0, slide_count - 1]`.
    ///
    /// Negative indices land on the first slide.
    pub fn go_to(&mut self, index: i64) -> Step {
        let target = if index < 0 {
            0
        } else {
            usize::try_from(index).unwrap_or(usize::MAX).min(self.last_slide())
        };
        if target == self.position {
            Step::Unchanged
        } else {
            self.position = target;
            Step::Moved
        }
    }

    /// Change the slide count after a relayout.
    ///
    /// The position is clamped to `min(position, slide_count - 1)`.
    /// Returns `true` if the slide count changed.
    pub fn set_slide_count(&mut self, slide_count: usize) -> bool {
        let slide_count = slide_count.max(1);
        if slide_count == self.slide_count {
            return false;
        }
        self.slide_count = slide_count;
        self.position = self.position.min(self.last_slide());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut state = CarouselState::new(3);
        let steps: Vec<_> = (0..3).map(|_| state.advance()).collect();
        assert_eq!(steps, vec![Step::Moved, Step::Moved, Step::Wrapped]);
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_retreat_wraps() {
        let mut state = CarouselState::new(4);
        assert_eq!(state.retreat(), Step::Wrapped);
        assert_eq!(state.position(), 3);
        assert_eq!(state.retreat(), Step::Moved);
        assert_eq!(state.position(), 2);
    }

    #[test]
    fn test_retreat_inverts_advance() {
        for count in 1..8 {
            for start in 0..count {
                let mut state = CarouselState::new(count);
                state.go_to(start as i64);
                state.advance();
                state.retreat();
                assert_eq!(state.position(), start, "count {count} start {start}");
            }
        }
    }

    #[test]
    fn test_single_slide_never_moves() {
        let mut state = CarouselState::new(1);
        assert_eq!(state.advance(), Step::Unchanged);
        assert_eq!(state.retreat(), Step::Unchanged);
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut state = CarouselState::new(3);
        assert_eq!(state.go_to(999), Step::Moved);
        assert_eq!(state.position(), 2);
        assert_eq!(state.go_to(-5), Step::Moved);
        assert_eq!(state.position(), 0);
        assert_eq!(state.go_to(0), Step::Unchanged);
    }

    #[test]
    fn test_step_follows_direction() {
        let mut state = CarouselState::new(3);
        state.step();
        assert_eq!(state.position(), 1);

        state.flip_direction();
        assert_eq!(state.direction(), Direction::Backward);
        state.step();
        state.step();
        assert_eq!(state.position(), 2);
    }

    #[test]
    fn test_set_slide_count_clamps() {
        let mut state = CarouselState::new(7);
        state.go_to(5);
        assert!(state.set_slide_count(3));
        assert_eq!(state.position(), 2);

        assert!(state.set_slide_count(7));
        assert_eq!(state.position(), 2);

        assert!(!state.set_slide_count(7));
        assert!(state.set_slide_count(0));
        assert_eq!(state.slide_count(), 1);
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_direction_toggle() {
        let mut dir = Direction::default();
        assert_eq!(dir, Direction::Forward);
        dir.toggle();
        assert_eq!(dir, Direction::Backward);
        assert_eq!(dir.reversed(), Direction::Forward);
    }
}
