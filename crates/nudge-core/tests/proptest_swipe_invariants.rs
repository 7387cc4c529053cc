//! Property-based invariant tests for the swipe state machines.
//!
//! 1. Small, slow gestures never fire an action
//! 2. Horizontal card drags past the threshold fire exactly one side, once
//! 3. Card state is fully reset after every release
//! 4. Armed/Disarmed notifications alternate and never repeat a direction
//! 5. Resistance never increases the offset and preserves its sign
//! 6. No panics on arbitrary raw event sequences; at most one fire per release

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use nudge_core::card_gesture::{CardAction, CardSwipe, CardSwipeConfig};
use nudge_core::event::{
    InputEvent, PointerEvent, PointerEventKind, TouchEvent, TouchPhase, TouchPoint,
};
use nudge_core::geometry::{Point, apply_resistance};
use nudge_core::gesture::{SwipeActions, SwipeConfig, SwipeRecognizer};
use nudge_core::semantic_event::{SwipeDirection, SwipeEvent};
use proptest::prelude::*;
use web_time::{Duration, Instant};

// ── Helpers ─────────────────────────────────────────────────────────────

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let hits = Rc::new(Cell::new(0));
    let inner = Rc::clone(&hits);
    (hits, move || inner.set(inner.get() + 1))
}

fn all_direction_recognizer() -> (SwipeRecognizer, Rc<Cell<u32>>) {
    let hits = Rc::new(Cell::new(0));
    let mut actions = SwipeActions::new();
    for dir in SwipeDirection::ALL {
        let hits = Rc::clone(&hits);
        actions.set(dir, move || hits.set(hits.get() + 1));
    }
    (SwipeRecognizer::with_actions(SwipeConfig::default(), actions), hits)
}

fn two_sided_card() -> (CardSwipe, Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let (left, left_action) = counter();
    let (right, right_action) = counter();
    let card = CardSwipe::new(CardSwipeConfig::default())
        .with_left(CardAction::new("Archive", left_action))
        .with_right(CardAction::new("Mark paid", right_action));
    (card, left, right)
}

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum RawOp {
    Pointer(PointerEventKind, u64, f32, f32),
    Touch(TouchPhase, Vec<(u64, f32, f32)>),
    FocusLost,
    Wait(u64),
}

fn coord() -> impl Strategy<Value = f32> {
    -400.0f32..400.0
}

fn raw_op_strategy() -> impl Strategy<Value = RawOp> {
    let kind = prop_oneof![
        Just(PointerEventKind::Down),
        Just(PointerEventKind::Move),
        Just(PointerEventKind::Up),
        Just(PointerEventKind::Cancel),
    ];
    let phase = prop_oneof![
        Just(TouchPhase::Start),
        Just(TouchPhase::Move),
        Just(TouchPhase::End),
        Just(TouchPhase::Cancel),
    ];
    prop_oneof![
        4 => (kind, 0u64..3, coord(), coord())
            .prop_map(|(k, id, x, y)| RawOp::Pointer(k, id, x, y)),
        2 => (phase, prop::collection::vec((0u64..3, coord(), coord()), 0..3))
            .prop_map(|(p, touches)| RawOp::Touch(p, touches)),
        1 => Just(RawOp::FocusLost),
        2 => (0u64..500).prop_map(RawOp::Wait),
    ]
}

fn to_event(op: &RawOp) -> Option<InputEvent> {
    match op {
        RawOp::Pointer(kind, id, x, y) => {
            Some(InputEvent::Pointer(PointerEvent::new(*kind, *id, *x, *y)))
        }
        RawOp::Touch(phase, touches) => Some(InputEvent::Touch(TouchEvent::new(
            *phase,
            touches
                .iter()
                .map(|&(id, x, y)| TouchPoint::new(id, x, y))
                .collect(),
        ))),
        RawOp::FocusLost => Some(InputEvent::FocusLost),
        RawOp::Wait(_) => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Small, slow gestures never fire
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn small_slow_gesture_never_fires(
        dx in -50.0f32..=50.0,
        dy in -50.0f32..=50.0,
        millis in 300u64..5_000,
    ) {
        let (mut gr, hits) = all_direction_recognizer();
        let t = Instant::now();
        gr.begin(Point::new(200.0, 200.0), t);
        gr.update(Point::new(200.0 + dx, 200.0 + dy));
        let outcome = gr.end(t + Duration::from_millis(millis)).unwrap();
        prop_assert!(!outcome.resolved);
        prop_assert_eq!(outcome.fired, None);
        prop_assert_eq!(hits.get(), 0);
    }

    #[test]
    fn large_swipe_fires_exactly_once(
        extent in 51.0f32..400.0,
        cross in 0.0f32..1.0,
        dir_idx in 0usize..4,
        millis in 1u64..5_000,
    ) {
        let dir = SwipeDirection::ALL[dir_idx];
        let minor = extent * cross * 0.99;
        let (dx, dy) = match dir {
            SwipeDirection::Left => (-extent, minor),
            SwipeDirection::Right => (extent, minor),
            SwipeDirection::Up => (minor, -extent),
            SwipeDirection::Down => (minor, extent),
        };
        let (mut gr, hits) = all_direction_recognizer();
        let t = Instant::now();
        gr.begin(Point::new(0.0, 0.0), t);
        gr.update(Point::new(dx, dy));
        let outcome = gr.end(t + Duration::from_millis(millis)).unwrap();
        prop_assert_eq!(outcome.fired, Some(dir));
        prop_assert_eq!(hits.get(), 1);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Horizontal card drags past the threshold fire one side once
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn card_past_threshold_fires_matching_side(
        dx_abs in 80.0f32..600.0,
        negative in any::<bool>(),
        dy_ratio in 0.0f32..0.99,
        millis in 1u64..3_000,
    ) {
        let dx = if negative { -dx_abs } else { dx_abs };
        let dy = dx_abs * dy_ratio;
        let (mut card, left, right) = two_sided_card();
        let t = Instant::now();
        card.begin(Point::new(0.0, 0.0), t);
        card.update(Point::new(dx, dy));
        let release = card.end(t + Duration::from_millis(millis)).unwrap();

        let expected = if negative { SwipeDirection::Left } else { SwipeDirection::Right };
        prop_assert_eq!(release.fired.map(|f| f.direction), Some(expected));
        prop_assert_eq!(left.get() + right.get(), 1);
        prop_assert_eq!(if negative { left.get() } else { right.get() }, 1);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3 + 4. Reset after release; arming notifications alternate
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn card_resets_and_arming_alternates(
        path in prop::collection::vec((coord(), coord()), 1..40),
        millis in 1u64..2_000,
    ) {
        let (mut card, left, right) = two_sided_card();
        let events = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let events = Rc::clone(&events);
            card.subscribe(move |e| events.borrow_mut().push(e.clone()))
        };

        let t = Instant::now();
        card.begin(Point::new(0.0, 0.0), t);
        for &(x, y) in &path {
            card.update(Point::new(x, y));
            prop_assert!(card.offset().abs() <= x.abs() + 1e-3);
        }
        card.end(t + Duration::from_millis(millis));

        prop_assert!(!card.is_dragging());
        prop_assert_eq!(card.offset(), 0.0);
        prop_assert_eq!(card.armed(), None);
        prop_assert!(left.get() + right.get() <= 1);

        let mut armed: Option<SwipeDirection> = None;
        for event in events.borrow().iter() {
            match event {
                SwipeEvent::Armed { direction } => {
                    prop_assert_eq!(armed, None);
                    armed = Some(*direction);
                }
                SwipeEvent::Disarmed { direction } => {
                    prop_assert_eq!(armed, Some(*direction));
                    armed = None;
                }
                _ => {}
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Resistance
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resistance_never_amplifies(
        raw in -2_000.0f32..2_000.0,
        max in 1.0f32..500.0,
        factor in 0.0f32..=1.0,
    ) {
        let damped = apply_resistance(raw, max, factor);
        prop_assert!(damped.abs() <= raw.abs() + 1e-3);
        if raw != 0.0 {
            prop_assert_eq!(damped.signum(), raw.signum());
        }
    }

    #[test]
    fn resistance_is_monotonic(
        a in 0.0f32..2_000.0,
        b in 0.0f32..2_000.0,
        max in 1.0f32..500.0,
        factor in 0.0f32..=1.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(apply_resistance(lo, max, factor) <= apply_resistance(hi, max, factor) + 1e-3);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Arbitrary raw streams
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_streams_fire_at_most_once_per_release(
        ops in prop::collection::vec(raw_op_strategy(), 0..80),
    ) {
        let (mut gr, hits) = all_direction_recognizer();
        let (mut card, left, right) = two_sided_card();
        let mut now = Instant::now();
        let mut releases = 0u32;
        let mut card_releases = 0u32;

        for op in &ops {
            if let RawOp::Wait(ms) = op {
                now += Duration::from_millis(*ms);
                continue;
            }
            let Some(event) = to_event(op) else { continue };
            if gr.process(&event, now).outcome.is_some() {
                releases += 1;
            }
            if card.process(&event, now).release.is_some() {
                card_releases += 1;
            }
        }

        prop_assert!(hits.get() <= releases);
        prop_assert!(left.get() + right.get() <= card_releases);
        if !card.is_dragging() {
            prop_assert_eq!(card.offset(), 0.0);
            prop_assert_eq!(card.armed(), None);
        }
    }
}
