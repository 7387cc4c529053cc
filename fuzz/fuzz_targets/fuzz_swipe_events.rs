#![no_main]

use std::cell::Cell;
use std::rc::Rc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nudge_core::card_gesture::{CardAction, CardSwipe, CardSwipeConfig};
use nudge_core::event::{
    InputEvent, PointerEvent, PointerEventKind, TouchEvent, TouchPhase, TouchPoint,
};
use nudge_core::gesture::{SwipeActions, SwipeConfig, SwipeRecognizer};
use nudge_core::semantic_event::SwipeDirection;
use web_time::{Duration, Instant};

#[derive(Debug, Arbitrary)]
enum Op {
    Pointer { kind: u8, id: u8, x: i16, y: i16 },
    Touch { phase: u8, points: Vec<(u8, i16, i16)> },
    FocusLost,
    Wait(u16),
    Disable(bool),
}

fn pointer_kind(k: u8) -> PointerEventKind {
    match k % 4 {
        0 => PointerEventKind::Down,
        1 => PointerEventKind::Move,
        2 => PointerEventKind::Up,
        _ => PointerEventKind::Cancel,
    }
}

fn touch_phase(p: u8) -> TouchPhase {
    match p % 4 {
        0 => TouchPhase::Start,
        1 => TouchPhase::Move,
        2 => TouchPhase::End,
        _ => TouchPhase::Cancel,
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let hits = Rc::new(Cell::new(0u32));
    let mut actions = SwipeActions::new();
    for dir in SwipeDirection::ALL {
        let hits = Rc::clone(&hits);
        actions.set(dir, move || hits.set(hits.get() + 1));
    }
    let mut recognizer = SwipeRecognizer::with_actions(SwipeConfig::default(), actions);

    let card_hits = Rc::new(Cell::new(0u32));
    let mut card = {
        let left = Rc::clone(&card_hits);
        let right = Rc::clone(&card_hits);
        CardSwipe::new(CardSwipeConfig::default())
            .with_left(CardAction::new("left", move || left.set(left.get() + 1)))
            .with_right(CardAction::new("right", move || right.set(right.get() + 1)))
    };

    let mut now = Instant::now();
    let mut releases = 0u32;
    let mut card_releases = 0u32;

    for op in ops.iter().take(512) {
        let event = match op {
            Op::Pointer { kind, id, x, y } => InputEvent::Pointer(PointerEvent::new(
                pointer_kind(*kind),
                u64::from(*id % 4),
                f32::from(*x),
                f32::from(*y),
            )),
            Op::Touch { phase, points } => InputEvent::Touch(TouchEvent::new(
                touch_phase(*phase),
                points
                    .iter()
                    .take(4)
                    .map(|&(id, x, y)| {
                        TouchPoint::new(u64::from(id % 4), f32::from(x), f32::from(y))
                    })
                    .collect(),
            )),
            Op::FocusLost => InputEvent::FocusLost,
            Op::Wait(ms) => {
                now += Duration::from_millis(u64::from(*ms));
                continue;
            }
            Op::Disable(disabled) => {
                recognizer.set_disabled(*disabled);
                card.set_disabled(*disabled);
                continue;
            }
        };

        if recognizer.process(&event, now).outcome.is_some() {
            releases += 1;
        }
        let response = card.process(&event, now);
        if response.release.is_some() {
            card_releases += 1;
        }

        assert!(card.offset().is_finite());
        if !card.is_dragging() {
            assert_eq!(card.offset(), 0.0);
            assert_eq!(card.armed(), None);
        }
    }

    assert!(hits.get() <= releases);
    assert!(card_hits.get() <= card_releases);
});
