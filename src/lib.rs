//! # category-carousel
//!
//! Controller for an auto-rotating carousel of category cards.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Laying out a fixed set of cards into slides based on viewport width
//! - Moving between slides with seamless wrap-around at either end
//! - Auto-advancing on a timer, periodically reversing direction
//! - Manual navigation: prev/next controls, indicator clicks, touch swipes
//! - Rendering slide indicators and track offsets (with optional web support)
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load [`CarouselConfig`] from TOML
//! - `web` - Enable DOM rendering and browser timing for WASM hosts
//!
//! ## Example
//!
//! ```rust,ignore
//! use category_carousel::{CardSet, CarouselConfig, CarouselController, Presenter, ViewportMetrics};
//! use category_carousel::render::web::{DomIndicators, DomTrack, PerformanceClock};
//!
//! let config = CarouselConfig::default();
//! let cards = CardSet::new(["books", "music", "games", "toys"])?;
//! let metrics = ViewportMetrics::measured(card.offset_width() as f64, config.card_gap, window_width);
//! let presenter = Presenter::new(
//!     DomIndicators::new(indicator_container),
//!     DomTrack::new(track, config.transition.clone()),
//! );
//!
//! let mut carousel = CarouselController::new(cards, metrics, config, PerformanceClock::new()?, presenter)?;
//!
//! // Wire host events to the handlers
//! carousel.next();
//! carousel.on_resize(new_metrics);
//! carousel.tick(); // from a periodic pump
//! ```

mod cards;
mod config;
mod controller;
mod error;
mod gesture;
mod layout;
pub mod render;
mod state;
mod timer;

pub use cards::CardSet;
pub use config::CarouselConfig;
pub use controller::CarouselController;
pub use error::{CarouselError, Result};
pub use gesture::{Swipe, SwipeTracker};
pub use layout::{slide_count, track_offset, Breakpoints, ViewportMetrics};
pub use render::{IndicatorView, Presenter, RenderEvent, RenderSink, TrackRenderer};
pub use state::{CarouselState, Direction, Step};
pub use timer::{Clock, ManualClock, RepeatingTimer, TimerKind};

#[cfg(feature = "web")]
pub use render::web::{DomIndicators, DomTrack, IntervalPump, PerformanceClock};
