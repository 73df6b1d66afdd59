//! Clock abstraction and cancellable repeating timers.
//!
//! Timers here never call back on their own. They only record deadlines;
//! the owner asks them what is due whenever the host pumps it (see
//! [`CarouselController::tick`](crate::CarouselController::tick)). This keeps
//! the carousel deterministic in tests and lets a WASM host drive it from a
//! single `setInterval` or `requestAnimationFrame` loop.

use std::cell::Cell;
use std::rc::Rc;

/// Source of the current time in milliseconds.
///
/// The epoch is up to the implementation; only differences matter.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Manually advanced clock, shared between clones.
///
/// ## Example
///
/// ```rust
/// use category_carousel::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(1500);
/// assert_eq!(clock.now_ms(), 1500);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute time. Time never goes backwards.
    pub fn set(&self, now_ms: u64) {
        self.now.set(self.now.get().max(now_ms));
    }

    /// Move the clock forward.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Which of the carousel's timers fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimerKind {
    /// Moves the carousel one slide in the current direction
    AutoAdvance,
    /// Reverses the auto-advance direction
    DirectionFlip,
}

/// A repeating timer driven by externally supplied timestamps.
///
/// Restarting is cancel-then-schedule: the next deadline is always one full
/// interval after the restart, and nothing scheduled before a cancel can
/// come due after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepeatingTimer {
    interval_ms: u64,
    next_due: Option<u64>,
}

impl RepeatingTimer {
    /// Create a stopped timer. A zero interval is treated as 1 ms.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due: None,
        }
    }

    /// Get the interval in milliseconds.
    #[inline]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Check if the timer is scheduled.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Time at which the timer next fires, if scheduled.
    #[inline]
    pub fn next_due(&self) -> Option<u64> {
        self.next_due
    }

    /// Schedule the timer one interval from `now_ms`, replacing any pending deadline.
    pub fn restart(&mut self, now_ms: u64) {
        self.next_due = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Start the timer if it is not already running.
    pub fn start(&mut self, now_ms: u64) {
        if self.next_due.is_none() {
            self.restart(now_ms);
        }
    }

    /// Stop the timer. Pending deadlines are dropped.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Check if the timer has a deadline at or before `now_ms`.
    #[inline]
    pub fn is_due(&self, now_ms: u64) -> bool {
        self.next_due.is_some_and(|due| due <= now_ms)
    }

    /// Consume the due occurrence, scheduling the next deadline after `now_ms`.
    ///
    /// Occurrences missed while the host was not pumping collapse into this
    /// one, so a timer fires at most once per `now_ms`. The schedule stays on
    /// its original grid of `interval_ms` steps.
    ///
    /// Returns the deadline that fired, or `None` if nothing was due.
    pub fn fire(&mut self, now_ms: u64) -> Option<u64> {
        let due = self.next_due.filter(|&due| due <= now_ms)?;
        let missed = (now_ms - due) / self.interval_ms;
        let next = missed
            .saturating_add(1)
            .saturating_mul(self.interval_ms)
            .saturating_add(due);
        self.next_due = Some(next);
        Some(due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeating_schedule() {
        let mut timer = RepeatingTimer::new(3000);
        assert!(!timer.is_active());
        assert_eq!(timer.fire(10_000), None);

        timer.start(0);
        assert_eq!(timer.next_due(), Some(3000));
        assert!(!timer.is_due(2999));
        assert_eq!(timer.fire(2999), None);

        assert_eq!(timer.fire(3000), Some(3000));
        assert_eq!(timer.next_due(), Some(6000));
    }

    #[test]
    fn test_late_fire_coalesces() {
        let mut timer = RepeatingTimer::new(1000);
        timer.start(0);

        let mut fired = Vec::new();
        while let Some(at) = timer.fire(3500) {
            fired.push(at);
        }
        assert_eq!(fired, vec![1000]);
        assert_eq!(timer.next_due(), Some(4000));

        // Landing exactly on a later deadline skips past it too
        assert_eq!(timer.fire(6000), Some(4000));
        assert_eq!(timer.next_due(), Some(7000));
    }

    #[test]
    fn test_long_gap_is_bounded() {
        let mut timer = RepeatingTimer::new(1);
        timer.start(0);
        let eight_hours = 8 * 3600 * 1000;
        assert_eq!(timer.fire(eight_hours), Some(1));
        assert_eq!(timer.fire(eight_hours), None);
        assert_eq!(timer.next_due(), Some(eight_hours + 1));
    }

    #[test]
    fn test_restart_replaces_deadline() {
        let mut timer = RepeatingTimer::new(3000);
        timer.start(0);
        timer.restart(2500);
        assert_eq!(timer.fire(3000), None);
        assert_eq!(timer.fire(5500), Some(5500));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut timer = RepeatingTimer::new(3000);
        timer.start(0);
        timer.start(1000);
        assert_eq!(timer.next_due(), Some(3000));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut timer = RepeatingTimer::new(3000);
        timer.start(0);
        timer.cancel();
        assert!(!timer.is_active());
        assert_eq!(timer.fire(100_000), None);
    }

    #[test]
    fn test_zero_interval() {
        let timer = RepeatingTimer::new(0);
        assert_eq!(timer.interval_ms(), 1);
    }

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new();
        let other = clock.clone();
        other.advance(250);
        assert_eq!(clock.now_ms(), 250);

        clock.set(100);
        assert_eq!(other.now_ms(), 250);
        clock.set(900);
        assert_eq!(other.now_ms(), 900);
    }
}
