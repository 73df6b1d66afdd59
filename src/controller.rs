//! Carousel controller: state, timers and input handling for one widget.

use crate::cards::CardSet;
use crate::config::CarouselConfig;
use crate::error::Result;
use crate::gesture::{Swipe, SwipeTracker};
use crate::layout::{slide_count, ViewportMetrics};
use crate::render::{RenderEvent, RenderSink};
use crate::state::{CarouselState, Direction, Step};
use crate::timer::{Clock, RepeatingTimer, TimerKind};

/// Drives one carousel instance.
///
/// The controller owns the slide state and both repeating timers
/// (auto-advance and direction-flip). It does not schedule anything itself:
/// the host calls [`tick`](Self::tick) regularly (or at
/// [`next_deadline`](Self::next_deadline)) and forwards input events to the
/// matching handler methods. Every visible change is emitted to the
/// [`RenderSink`] as a [`RenderEvent`].
///
/// ## Example
///
/// ```rust
/// use category_carousel::{
///     CardSet, CarouselConfig, CarouselController, ManualClock, RenderEvent, ViewportMetrics,
/// };
///
/// let clock = ManualClock::new();
/// let cards = CardSet::anonymous(7)?;
/// let metrics = ViewportMetrics::new(300.0, 1200.0); // three cards per view
/// let mut carousel = CarouselController::new(
///     cards,
///     metrics,
///     CarouselConfig::default(),
///     clock.clone(),
///     Vec::<RenderEvent>::new(),
/// )?;
/// assert_eq!(carousel.slide_count(), 3);
///
/// // Auto-advance fires every three seconds
/// clock.advance(3000);
/// carousel.tick();
/// assert_eq!(carousel.position(), 1);
///
/// // Hovering pauses automatic movement
/// carousel.pause();
/// clock.advance(30_000);
/// carousel.tick();
/// assert_eq!(carousel.position(), 1);
/// # Ok::<(), category_carousel::CarouselError>(())
/// ```
#[derive(Debug)]
pub struct CarouselController<S, C> {
    cards: CardSet,
    metrics: ViewportMetrics,
    config: CarouselConfig,
    cards_per_view: usize,
    state: CarouselState,
    auto_advance: RepeatingTimer,
    direction_flip: RepeatingTimer,
    swipe: SwipeTracker,
    paused: bool,
    torn_down: bool,
    render_pending: bool,
    clock: C,
    sink: S,
}

impl<S: RenderSink, C: Clock> CarouselController<S, C> {
    /// Create a controller, start both timers and render the first slide.
    ///
    /// Fails if the config is invalid; [`CardSet`] already guarantees at
    /// least one card. Unusable metrics do not fail; rendering is deferred
    /// until [`on_resize`](Self::on_resize) supplies a real card width.
    pub fn new(
        cards: CardSet,
        metrics: ViewportMetrics,
        config: CarouselConfig,
        clock: C,
        sink: S,
    ) -> Result<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejecting carousel config");
            return Err(err);
        }

        let cards_per_view = config.breakpoints.cards_per_view(metrics.container_width);
        let state = CarouselState::new(slide_count(cards.len(), cards_per_view));
        let now = clock.now_ms();

        let mut auto_advance = RepeatingTimer::new(config.auto_advance_ms);
        let mut direction_flip = RepeatingTimer::new(config.direction_flip_ms);
        auto_advance.start(now);
        direction_flip.start(now);

        let mut controller = Self {
            cards,
            metrics,
            config,
            cards_per_view,
            state,
            auto_advance,
            direction_flip,
            swipe: SwipeTracker::new(),
            paused: false,
            torn_down: false,
            render_pending: false,
            clock,
            sink,
        };
        tracing::debug!(
            cards = controller.cards.len(),
            slides = controller.state.slide_count(),
            cards_per_view,
            "carousel initialised"
        );
        controller.render(false);
        Ok(controller)
    }

    /// Move one slide forward, jumping without animation from the last slide to the first.
    pub fn advance(&mut self) -> Step {
        if self.torn_down {
            return Step::Unchanged;
        }
        let step = self.state.advance();
        self.present_step(step);
        step
    }

    /// Move one slide back, jumping without animation from the first slide to the last.
    pub fn retreat(&mut self) -> Step {
        if self.torn_down {
            return Step::Unchanged;
        }
        let step = self.state.retreat();
        self.present_step(step);
        step
    }

    /// Jump to a slide (indicator click).
    ///
    /// The index is clamped into range. Always re-renders and restarts the
    /// auto-advance timer; the direction-flip timer keeps its schedule.
    pub fn go_to_slide(&mut self, index: i64) -> Step {
        if self.torn_down {
            return Step::Unchanged;
        }
        let step = self.state.go_to(index);
        self.render(false);
        self.restart_auto_advance();
        step
    }

    /// Explicit "previous" control: retreat, face backward, restart auto-advance.
    pub fn previous(&mut self) -> Step {
        self.navigate(Direction::Backward)
    }

    /// Explicit "next" control: advance, face forward, restart auto-advance.
    pub fn next(&mut self) -> Step {
        self.navigate(Direction::Forward)
    }

    /// Apply new viewport metrics.
    ///
    /// Recomputes cards per view and slide count, clamps the position into
    /// the new range and re-renders (rebuilding indicators) with animation.
    pub fn on_resize(&mut self, metrics: ViewportMetrics) {
        if self.torn_down {
            return;
        }
        self.metrics = metrics;
        self.cards_per_view = self
            .config
            .breakpoints
            .cards_per_view(metrics.container_width);
        let slides = slide_count(self.cards.len(), self.cards_per_view);
        if self.state.set_slide_count(slides) {
            tracing::debug!(
                slides,
                cards_per_view = self.cards_per_view,
                position = self.state.position(),
                "carousel relayout"
            );
        }
        self.render(false);
    }

    /// Handle a finished horizontal swipe of `delta_x` pixels (`start - end`).
    ///
    /// Swipes beyond the threshold move the carousel, set the direction to
    /// match and restart the auto-advance timer. Shorter ones are ignored.
    pub fn on_swipe(&mut self, delta_x: f64) -> Option<Swipe> {
        if self.torn_down {
            return None;
        }
        let swipe = Swipe::classify(delta_x, self.config.swipe_threshold)?;
        match swipe {
            Swipe::Forward => self.navigate(Direction::Forward),
            Swipe::Backward => self.navigate(Direction::Backward),
        };
        Some(swipe)
    }

    /// Record the x coordinate where a touch began.
    pub fn touch_start(&mut self, x: f64) {
        self.swipe.begin(x);
    }

    /// Finish a touch at `x` and handle it as a swipe.
    pub fn touch_end(&mut self, x: f64) -> Option<Swipe> {
        let delta_x = self.swipe.end(x)?;
        self.on_swipe(delta_x)
    }

    /// Stop auto-advance (pointer entered the track). Direction flipping continues.
    pub fn pause(&mut self) {
        if self.torn_down {
            return;
        }
        self.paused = true;
        self.auto_advance.cancel();
        tracing::trace!("carousel auto-advance paused");
    }

    /// Restart auto-advance a full interval from now (pointer left the track).
    pub fn resume(&mut self) {
        if self.torn_down {
            return;
        }
        self.paused = false;
        self.auto_advance.restart(self.clock.now_ms());
        tracing::trace!("carousel auto-advance resumed");
    }

    /// Fire the timers that are due.
    ///
    /// Each timer fires at most once per call; deadlines missed during a
    /// long gap between calls collapse into one occurrence. Due timers run
    /// in deadline order, and when both are due at the same instant
    /// auto-advance goes first. Returns `true` if the position changed.
    pub fn tick(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let now = self.clock.now_ms();
        let mut moved = false;
        while let Some(kind) = self.next_due_timer(now) {
            match kind {
                TimerKind::AutoAdvance => {
                    if let Some(at) = self.auto_advance.fire(now) {
                        tracing::trace!(at, direction = ?self.state.direction(), "auto-advance");
                        moved |= self.step_in_direction().changed();
                    }
                }
                TimerKind::DirectionFlip => {
                    if let Some(at) = self.direction_flip.fire(now) {
                        self.state.flip_direction();
                        tracing::trace!(at, direction = ?self.state.direction(), "direction flip");
                    }
                }
            }
        }
        moved
    }

    /// Earliest pending timer deadline, for hosts that schedule a single wake-up.
    pub fn next_deadline(&self) -> Option<u64> {
        [self.auto_advance.next_due(), self.direction_flip.next_due()]
            .into_iter()
            .flatten()
            .min()
    }

    fn next_due_timer(&self, now: u64) -> Option<TimerKind> {
        [
            (TimerKind::AutoAdvance, &self.auto_advance),
            (TimerKind::DirectionFlip, &self.direction_flip),
        ]
        .into_iter()
        .filter_map(|(kind, timer)| {
            timer
                .next_due()
                .filter(|&due| due <= now)
                .map(|due| (due, kind))
        })
        .min()
        .map(|(_, kind)| kind)
    }

    fn navigate(&mut self, direction: Direction) -> Step {
        if self.torn_down {
            return Step::Unchanged;
        }
        self.state.set_direction(direction);
        let step = self.step_in_direction();
        self.restart_auto_advance();
        step
    }

    fn step_in_direction(&mut self) -> Step {
        let step = self.state.step();
        self.present_step(step);
        step
    }

    fn restart_auto_advance(&mut self) {
        // A paused carousel picks its schedule back up in `resume`.
        if !self.paused {
            self.auto_advance.restart(self.clock.now_ms());
        }
    }

    fn present_step(&mut self, step: Step) {
        if step.wrapped() {
            tracing::debug!(position = self.state.position(), "carousel wrapped");
        }
        if step.changed() {
            self.render(step.wrapped());
        }
    }

    fn render(&mut self, suppress_animation: bool) {
        if let Err(err) = self.metrics.validate() {
            self.render_pending = true;
            tracing::debug!(%err, "deferring carousel render");
            return;
        }
        self.render_pending = false;
        let event = RenderEvent {
            position: self.state.position(),
            slide_count: self.state.slide_count(),
            cards_per_view: self.cards_per_view,
            card_width: self.metrics.card_width,
            suppress_animation,
        };
        self.sink.render(&event);
    }
}

impl<S, C> CarouselController<S, C> {
    /// Cancel both timers and stop reacting to input.
    ///
    /// Called automatically on drop.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.auto_advance.cancel();
        self.direction_flip.cancel();
        self.torn_down = true;
        tracing::debug!("carousel torn down");
    }

    /// Get the slide state.
    #[inline]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Get the current slide index.
    #[inline]
    pub fn position(&self) -> usize {
        self.state.position()
    }

    /// Get the total number of slides.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.state.slide_count()
    }

    /// Get the auto-advance direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    /// Get the number of cards visible at once.
    #[inline]
    pub fn cards_per_view(&self) -> usize {
        self.cards_per_view
    }

    /// Get the latest viewport metrics.
    #[inline]
    pub fn metrics(&self) -> &ViewportMetrics {
        &self.metrics
    }

    /// Get the card set.
    #[inline]
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    /// Card identifiers on the current slide.
    pub fn visible_cards(&self) -> &[String] {
        self.cards
            .slide_cards(self.state.position(), self.cards_per_view)
    }

    /// Get the active configuration.
    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Check if auto-advance is paused by hover.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Check if the controller has been torn down.
    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Check if a render is waiting for usable metrics.
    #[inline]
    pub fn is_render_pending(&self) -> bool {
        self.render_pending
    }

    /// Get the auto-advance timer.
    #[inline]
    pub fn auto_advance_timer(&self) -> &RepeatingTimer {
        &self.auto_advance
    }

    /// Get the direction-flip timer.
    #[inline]
    pub fn direction_flip_timer(&self) -> &RepeatingTimer {
        &self.direction_flip
    }

    /// Get the render sink.
    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get the render sink mutably.
    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl<S, C> Drop for CarouselController<S, C> {
    fn drop(&mut self) {
        self.teardown();
    }
}
