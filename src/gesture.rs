//! Touch swipe recognition.

/// A recognised horizontal swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left; shows the next slide
    Forward,
    /// Finger moved right; shows the previous slide
    Backward,
}

impl Swipe {
    /// Classify a horizontal delta (`start_x - end_x`).
    ///
    /// Deltas whose magnitude does not exceed `threshold` are not swipes.
    ///
    /// ```rust
    /// use category_carousel::Swipe;
    ///
    /// assert_eq!(Swipe::classify(60.0, 50.0), Some(Swipe::Forward));
    /// assert_eq!(Swipe::classify(-60.0, 50.0), Some(Swipe::Backward));
    /// assert_eq!(Swipe::classify(30.0, 50.0), None);
    /// ```
    pub fn classify(delta_x: f64, threshold: f64) -> Option<Self> {
        if delta_x.is_nan() || delta_x.abs() <= threshold {
            None
        } else if delta_x > 0.0 {
            Some(Swipe::Forward)
        } else {
            Some(Swipe::Backward)
        }
    }
}

/// Remembers where a touch started so the matching end can be measured.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the x coordinate where a touch began.
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish a touch and return its delta (`start - end`).
    ///
    /// Returns `None` if no touch was in progress.
    pub fn end(&mut self, x: f64) -> Option<f64> {
        self.start_x.take().map(|start| start - x)
    }

    /// Check if a touch is in progress.
    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
