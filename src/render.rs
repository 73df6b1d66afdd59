//! Rendering contract between the carousel and its views.

use crate::layout::track_offset;

/// Everything a view needs to show the carousel after a change.
///
/// This is a platform-agnostic description of the visible state.
/// Each consumer can interpret it for its rendering backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderEvent {
    /// Current slide index
    pub position: usize,
    /// Total number of slides (and indicators)
    pub slide_count: usize,
    /// Cards visible at once
    pub cards_per_view: usize,
    /// Gap-inclusive width of one card in pixels
    pub card_width: f64,
    /// Jump straight to the new offset instead of animating
    pub suppress_animation: bool,
}

impl RenderEvent {
    /// Index of the indicator to highlight.
    #[inline]
    pub fn active_indicator(&self) -> usize {
        self.position
    }

    /// Horizontal track offset in pixels.
    #[inline]
    pub fn offset_px(&self) -> f64 {
        track_offset(self.position, self.cards_per_view, self.card_width)
    }

    /// Whether the track should transition to the new offset.
    #[inline]
    pub fn animate(&self) -> bool {
        !self.suppress_animation
    }

    /// CSS transform placing the track at this offset.
    pub fn transform_css(&self) -> String {
        format!("translateX(-{}px)", self.offset_px())
    }
}

/// Receiver of render events.
pub trait RenderSink {
    /// Show the carousel as described by `event`.
    fn render(&mut self, event: &RenderEvent);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, event: &RenderEvent) {
        (**self).render(event);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn render(&mut self, event: &RenderEvent) {
        (**self).render(event);
    }
}

/// Records every event, which is handy for tests and headless hosts.
impl RenderSink for Vec<RenderEvent> {
    fn render(&mut self, event: &RenderEvent) {
        self.push(*event);
    }
}

/// Draws one marker per slide and highlights the active one.
pub trait IndicatorView {
    /// Show `count` indicators with `active` highlighted.
    fn render(&mut self, count: usize, active: usize);
}

/// Moves the card track horizontally.
pub trait TrackRenderer {
    /// Place the track `offset_px` pixels to the left, transitioning if `animate`.
    fn apply_offset(&mut self, offset_px: f64, animate: bool);
}

/// Standard sink that splits each event between an indicator view and a track.
#[derive(Clone, Debug, Default)]
pub struct Presenter<I, T> {
    indicators: I,
    track: T,
}

impl<I, T> Presenter<I, T> {
    /// Create a presenter over the two views.
    pub fn new(indicators: I, track: T) -> Self {
        Self { indicators, track }
    }

    /// Get the indicator view.
    pub fn indicators(&self) -> &I {
        &self.indicators
    }

    /// Get the track renderer.
    pub fn track(&self) -> &T {
        &self.track
    }

    /// Take the views back.
    pub fn into_parts(self) -> (I, T) {
        (self.indicators, self.track)
    }
}

impl<I: IndicatorView, T: TrackRenderer> RenderSink for Presenter<I, T> {
    fn render(&mut self, event: &RenderEvent) {
        self.indicators
            .render(event.slide_count, event.active_indicator());
        self.track.apply_offset(event.offset_px(), event.animate());
    }
}

/// Web-specific rendering implementation.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use crate::timer::Clock;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement, Performance, Window};

    /// Class given to each indicator element.
    pub const INDICATOR_CLASS: &str = "category-indicator";
    /// Class marking the highlighted indicator.
    pub const ACTIVE_CLASS: &str = "active";

    /// Track renderer that sets `transform` and `transition` on a DOM element.
    #[derive(Clone, Debug)]
    pub struct DomTrack {
        track: HtmlElement,
        transition: String,
    }

    impl DomTrack {
        /// Create a track renderer using `transition` as the animated CSS transition.
        pub fn new(track: HtmlElement, transition: impl Into<String>) -> Self {
            Self {
                track,
                transition: transition.into(),
            }
        }

        /// Get the track element.
        pub fn element(&self) -> &HtmlElement {
            &self.track
        }

        fn set_style(&self, name: &str, value: &str) -> Result<(), String> {
            self.track
                .style()
                .set_property(name, value)
                .map_err(|_| format!("Failed to set {name}"))
        }

        /// Apply an offset, reporting DOM failures.
        ///
        /// A non-animated move disables the transition, jumps, forces a
        /// reflow so the jump is committed, then restores the transition.
        pub fn try_apply_offset(&self, offset_px: f64, animate: bool) -> Result<(), String> {
            let transform = format!("translateX(-{offset_px}px)");
            if animate {
                self.set_style("transition", &self.transition)?;
                self.set_style("transform", &transform)?;
            } else {
                self.set_style("transition", "none")?;
                self.set_style("transform", &transform)?;
                // Reading layout flushes the jump before the transition returns.
                let _ = self.track.offset_width();
                self.set_style("transition", &self.transition)?;
            }
            Ok(())
        }
    }

    impl TrackRenderer for DomTrack {
        fn apply_offset(&mut self, offset_px: f64, animate: bool) {
            if let Err(err) = self.try_apply_offset(offset_px, animate) {
                tracing::warn!(%err, "failed to move carousel track");
            }
        }
    }

    /// Indicator view that manages `div.category-indicator` children of a container.
    #[derive(Clone, Debug)]
    pub struct DomIndicators {
        container: Element,
        indicators: Vec<Element>,
    }

    impl DomIndicators {
        /// Create an indicator view rendering into `container`.
        pub fn new(container: Element) -> Self {
            Self {
                container,
                indicators: Vec::new(),
            }
        }

        /// Indicator elements currently in the DOM, in slide order.
        ///
        /// Hosts attach click handlers calling `go_to_slide(i)` to these after
        /// the count changes.
        pub fn indicators(&self) -> &[Element] {
            &self.indicators
        }

        fn rebuild(&mut self, count: usize) -> Result<(), String> {
            let document = self
                .container
                .owner_document()
                .ok_or("No document available")?;
            self.container.set_inner_html("");
            self.indicators.clear();
            for _ in 0..count {
                let indicator = document
                    .create_element("div")
                    .map_err(|_| "Failed to create indicator element")?;
                indicator.set_class_name(INDICATOR_CLASS);
                self.container
                    .append_child(&indicator)
                    .map_err(|_| "Failed to append indicator")?;
                self.indicators.push(indicator);
            }
            Ok(())
        }

        /// Render indicators, reporting DOM failures.
        pub fn try_render(&mut self, count: usize, active: usize) -> Result<(), String> {
            if self.indicators.len() != count {
                self.rebuild(count)?;
            }
            for (i, indicator) in self.indicators.iter().enumerate() {
                indicator
                    .class_list()
                    .toggle_with_force(ACTIVE_CLASS, i == active)
                    .map_err(|_| "Failed to toggle active indicator")?;
            }
            Ok(())
        }
    }

    impl IndicatorView for DomIndicators {
        fn render(&mut self, count: usize, active: usize) {
            if let Err(err) = self.try_render(count, active) {
                tracing::warn!(%err, "failed to render carousel indicators");
            }
        }
    }

    /// Clock backed by `performance.now()`.
    #[derive(Clone, Debug)]
    pub struct PerformanceClock {
        performance: Performance,
    }

    impl PerformanceClock {
        /// Use the current window's performance timer.
        pub fn new() -> Result<Self, String> {
            let window = web_sys::window().ok_or("No window available")?;
            let performance = window.performance().ok_or("No performance timer available")?;
            Ok(Self { performance })
        }
    }

    impl Clock for PerformanceClock {
        fn now_ms(&self) -> u64 {
            self.performance.now().max(0.0) as u64
        }
    }

    /// A `setInterval` registration calling a closure, cleared on drop.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// let controller = Rc::new(RefCell::new(controller));
    /// let pump_target = Rc::clone(&controller);
    /// let _pump = IntervalPump::start(100, move || {
    ///     pump_target.borrow_mut().tick();
    /// })?;
    /// ```
    pub struct IntervalPump {
        window: Window,
        handle: i32,
        _callback: Closure<dyn FnMut()>,
    }

    impl IntervalPump {
        /// Call `f` every `period_ms` milliseconds until the pump is dropped.
        pub fn start(period_ms: i32, f: impl FnMut() + 'static) -> Result<Self, String> {
            let window = web_sys::window().ok_or("No window available")?;
            let callback = Closure::<dyn FnMut()>::new(f);
            let function: &js_sys::Function = callback.as_ref().unchecked_ref();
            let handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(function, period_ms)
                .map_err(|_| "Failed to schedule interval")?;
            Ok(Self {
                window,
                handle,
                _callback: callback,
            })
        }
    }

    impl Drop for IntervalPump {
        fn drop(&mut self) {
            self.window.clear_interval_with_handle(self.handle);
        }
    }
}
