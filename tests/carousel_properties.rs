use category_carousel::{
    CardSet, CarouselConfig, CarouselController, Direction, IndicatorView, ManualClock, Presenter,
    RenderEvent, TrackRenderer, ViewportMetrics,
};

type Recording = CarouselController<Vec<RenderEvent>, ManualClock>;

// Container widths hitting each breakpoint: 1, 2 and 3 cards per view.
const WIDTHS: [(f64, usize); 3] = [(400.0, 1), (800.0, 2), (1200.0, 3)];

fn carousel(cards: usize, container_width: f64, clock: &ManualClock) -> Recording {
    CarouselController::new(
        CardSet::anonymous(cards).unwrap(),
        ViewportMetrics::new(300.0, container_width),
        CarouselConfig::default(),
        clock.clone(),
        Vec::new(),
    )
    .unwrap()
}

fn assert_in_bounds(ctrl: &Recording) {
    assert!(ctrl.slide_count() >= 1);
    assert!(ctrl.position() < ctrl.slide_count());
}

#[test]
fn slide_count_and_bounds_hold_under_any_operation() {
    let clock = ManualClock::new();
    for cards in 1..=12 {
        for (width, per_view) in WIDTHS {
            let mut ctrl = carousel(cards, width, &clock);
            assert_eq!(ctrl.slide_count(), cards.div_ceil(per_view));

            // A fixed but varied script of operations
            for i in 0..40i64 {
                match i % 7 {
                    0 | 1 => {
                        ctrl.advance();
                    }
                    2 => {
                        ctrl.retreat();
                    }
                    3 => {
                        ctrl.go_to_slide(i * 3 - 40);
                    }
                    4 => {
                        let (w, _) = WIDTHS[(i as usize) % WIDTHS.len()];
                        ctrl.on_resize(ViewportMetrics::new(300.0, w));
                    }
                    5 => {
                        ctrl.on_swipe(if i % 2 == 0 { 80.0 } else { -80.0 });
                    }
                    _ => {
                        clock.advance(3000);
                        ctrl.tick();
                    }
                }
                assert_in_bounds(&ctrl);
                for event in ctrl.sink() {
                    assert!(event.position < event.slide_count);
                }
            }
        }
    }
}

#[test]
fn full_cycle_returns_to_start() {
    let clock = ManualClock::new();
    for cards in 1..=10 {
        for (width, _) in WIDTHS {
            let mut ctrl = carousel(cards, width, &clock);
            for _ in 0..ctrl.slide_count() {
                ctrl.advance();
            }
            assert_eq!(ctrl.position(), 0);
        }
    }
}

#[test]
fn retreat_undoes_advance() {
    let clock = ManualClock::new();
    let mut ctrl = carousel(9, 400.0, &clock);
    for start in 0..ctrl.slide_count() {
        ctrl.go_to_slide(start as i64);
        ctrl.advance();
        ctrl.retreat();
        assert_eq!(ctrl.position(), start);
    }
}

#[test]
fn seven_cards_three_per_view_scenario() {
    let clock = ManualClock::new();
    let mut ctrl = carousel(7, 1200.0, &clock);
    assert_eq!(ctrl.slide_count(), 3);
    ctrl.sink_mut().clear();

    for _ in 0..3 {
        ctrl.advance();
    }
    let positions: Vec<_> = ctrl.sink().iter().map(|e| e.position).collect();
    let suppressed: Vec<_> = ctrl.sink().iter().map(|e| e.suppress_animation).collect();
    assert_eq!(positions, vec![1, 2, 0]);
    assert_eq!(suppressed, vec![false, false, true]);
}

#[test]
fn wrap_backward_then_animated_again() {
    let clock = ManualClock::new();
    let mut ctrl = carousel(7, 800.0, &clock);
    ctrl.sink_mut().clear();

    ctrl.retreat();
    ctrl.go_to_slide(1);
    let suppressed: Vec<_> = ctrl.sink().iter().map(|e| e.suppress_animation).collect();
    assert_eq!(suppressed, vec![true, false]);
}

#[test]
fn go_to_slide_clamps_out_of_range() {
    let clock = ManualClock::new();
    let mut ctrl = carousel(7, 1200.0, &clock);
    ctrl.go_to_slide(-5);
    assert_eq!(ctrl.position(), 0);
    ctrl.go_to_slide(999);
    assert_eq!(ctrl.position(), ctrl.slide_count() - 1);
}

#[test]
fn swipe_threshold() {
    let clock = ManualClock::new();
    let mut ctrl = carousel(7, 1200.0, &clock);
    ctrl.go_to_slide(1);

    ctrl.on_swipe(-60.0);
    assert_eq!(ctrl.position(), 0);
    assert_eq!(ctrl.direction(), Direction::Backward);

    let rendered = ctrl.sink().len();
    ctrl.on_swipe(30.0);
    assert_eq!(ctrl.position(), 0);
    assert_eq!(ctrl.sink().len(), rendered);
}

#[test]
fn resize_clamps_to_new_bounds() {
    let clock = ManualClock::new();

    // 3 -> 7 slides: position kept
    let mut ctrl = carousel(7, 1200.0, &clock);
    ctrl.go_to_slide(2);
    ctrl.on_resize(ViewportMetrics::new(300.0, 400.0));
    assert_eq!(ctrl.slide_count(), 7);
    assert_eq!(ctrl.position(), 2usize.min(7 - 1));

    // 7 -> 3 slides: position pulled back
    ctrl.go_to_slide(5);
    ctrl.on_resize(ViewportMetrics::new(300.0, 1200.0));
    assert_eq!(ctrl.slide_count(), 3);
    assert_eq!(ctrl.position(), 5usize.min(3 - 1));
    assert_eq!(ctrl.sink().last().map(|e| e.slide_count), Some(3));
}

#[test]
fn manual_navigation_restarts_only_auto_advance() {
    let clock = ManualClock::new();
    let mut ctrl = carousel(7, 400.0, &clock);

    clock.set(2500);
    ctrl.next();
    assert_eq!(ctrl.position(), 1);

    // The 3000 deadline was replaced by 5500
    clock.set(3000);
    assert!(!ctrl.tick());
    clock.set(5500);
    assert!(ctrl.tick());
    assert_eq!(ctrl.position(), 2);

    // Direction flip still lands at 6000
    clock.set(6000);
    ctrl.tick();
    assert_eq!(ctrl.direction(), Direction::Backward);
}

#[test]
fn teardown_releases_timers() {
    let clock = ManualClock::new();
    let mut ctrl = carousel(4, 400.0, &clock);
    ctrl.teardown();
    assert_eq!(ctrl.next_deadline(), None);
    clock.advance(60_000);
    assert!(!ctrl.tick());
    assert_eq!(ctrl.position(), 0);
}

#[derive(Default)]
struct Dots {
    count: usize,
    active: Vec<usize>,
}

impl IndicatorView for Dots {
    fn render(&mut self, count: usize, active: usize) {
        self.count = count;
        self.active.push(active);
    }
}

#[derive(Default)]
struct Track {
    offsets: Vec<(f64, bool)>,
}

impl TrackRenderer for Track {
    fn apply_offset(&mut self, offset_px: f64, animate: bool) {
        self.offsets.push((offset_px, animate));
    }
}

#[test]
fn presenter_drives_views() {
    let clock = ManualClock::new();
    let mut ctrl = CarouselController::new(
        CardSet::anonymous(7).unwrap(),
        ViewportMetrics::measured(280.0, 20.0, 1200.0),
        CarouselConfig::default(),
        clock.clone(),
        Presenter::new(Dots::default(), Track::default()),
    )
    .unwrap();

    clock.set(3000);
    ctrl.tick();
    clock.set(6000);
    ctrl.tick();
    clock.set(9000);
    ctrl.tick();

    let dots = ctrl.sink().indicators();
    assert_eq!(dots.count, 3);
    // init, 3000 fwd -> 1, 6000 fwd -> 2, 9000 (now backward) -> 1
    assert_eq!(dots.active, vec![0, 1, 2, 1]);

    let track = ctrl.sink().track();
    assert_eq!(
        track.offsets,
        vec![(0.0, true), (900.0, true), (1800.0, true), (900.0, true)]
    );
}
