#![forbid(unsafe_code)]

//! Canonical pointer and touch input types.
//!
//! Platforms deliver either pointer events (mouse, pen, unified pointer
//! streams) or touch events carrying a list of changed touch points. Both
//! are normalized here, and [`PrimaryPointer`] reduces them to a single
//! tracked stream of [`PointerPhase`]s.
//!
//! # Design Notes
//!
//! - Only the first pointer (or first touch point) that goes down is
//!   tracked. Secondary contacts are ignored until the primary lifts.
//! - Events that carry no usable data (a touch event with no touch points,
//!   a move with no active pointer) are dropped silently.
//! - Losing focus cancels the tracked pointer.

use crate::geometry::Point;

/// Platform identifier of a pointer or touch contact.
pub type PointerId = u64;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A unified pointer event (mouse, pen, or touch via pointer events).
    Pointer(PointerEvent),

    /// A touch event with the touch points that changed.
    Touch(TouchEvent),

    /// The surface lost focus; any in-flight gesture is abandoned.
    FocusLost,
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pointer_id: PointerId,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, pointer_id: PointerId, x: f32, y: f32) -> Self {
        Self {
            kind,
            pointer_id,
            x,
            y,
        }
    }

    /// Position of the event.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Pointer event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The platform took the pointer away (e.g. a native scroll started).
    Cancel,
}

/// A touch event.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// Touch points that changed in this event.
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Create a touch event.
    #[must_use]
    pub fn new(phase: TouchPhase, touches: Vec<TouchPoint>) -> Self {
        Self { phase, touches }
    }
}

/// Touch event phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A single touch contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: PointerId,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    /// Create a touch point.
    #[must_use]
    pub const fn new(id: PointerId, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    /// Position of the contact.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One step of the tracked pointer stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPhase {
    Begin(Point),
    Move(Point),
    End(Point),
    Cancel,
}

/// Latches onto the first pointer that goes down and filters everything
/// else out.
#[derive(Debug, Clone, Default)]
pub struct PrimaryPointer {
    active: Option<PointerId>,
}

impl PrimaryPointer {
    /// Create a filter with no active pointer.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// The pointer currently being tracked.
    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<PointerId> {
        self.active
    }

    /// Forget the tracked pointer without producing a phase.
    pub fn release(&mut self) {
        self.active = None;
    }

    /// Reduce a raw event to a phase of the primary pointer stream.
    ///
    /// Returns `None` for events that belong to a secondary contact or that
    /// carry nothing usable.
    pub fn filter(&mut self, event: &InputEvent) -> Option<PointerPhase> {
        match event {
            InputEvent::Pointer(pointer) => self.on_contact(
                Self::pointer_stage(pointer.kind),
                pointer.pointer_id,
                pointer.position(),
            ),
            InputEvent::Touch(touch) => {
                let stage = Self::touch_stage(touch.phase);
                let point = match self.active {
                    // A new gesture starts from the first listed contact.
                    None => touch.touches.first()?,
                    Some(id) => touch.touches.iter().find(|t| t.id == id)?,
                };
                self.on_contact(stage, point.id, point.position())
            }
            InputEvent::FocusLost => self.active.take().map(|_| PointerPhase::Cancel),
        }
    }

    fn on_contact(&mut self, stage: Stage, id: PointerId, pos: Point) -> Option<PointerPhase> {
        match (stage, self.active) {
            (Stage::Down, None) => {
                self.active = Some(id);
                Some(PointerPhase::Begin(pos))
            }
            (Stage::Move, Some(active)) if active == id => Some(PointerPhase::Move(pos)),
            (Stage::Up, Some(active)) if active == id => {
                self.active = None;
                Some(PointerPhase::End(pos))
            }
            (Stage::Cancel, Some(active)) if active == id => {
                self.active = None;
                Some(PointerPhase::Cancel)
            }
            _ => None,
        }
    }

    const fn pointer_stage(kind: PointerEventKind) -> Stage {
        match kind {
            PointerEventKind::Down => Stage::Down,
            PointerEventKind::Move => Stage::Move,
            PointerEventKind::Up => Stage::Up,
            PointerEventKind::Cancel => Stage::Cancel,
        }
    }

    const fn touch_stage(phase: TouchPhase) -> Stage {
        match phase {
            TouchPhase::Start => Stage::Down,
            TouchPhase::Move => Stage::Move,
            TouchPhase::End => Stage::Up,
            TouchPhase::Cancel => Stage::Cancel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Down,
    Move,
    Up,
    Cancel,
}
