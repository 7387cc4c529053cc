#![forbid(unsafe_code)]

//! High-level swipe events derived from pointer input.
//!
//! [`SwipeResult`] is produced once per completed gesture. [`SwipeEvent`] is
//! what the recognizers publish to subscribers while a gesture is in flight.
//!
//! # Invariants
//! 1. Every gesture is well-formed: `Started` → zero or more
//!    `Armed`/`Disarmed` → exactly one `Swiped` or `Cancelled`.
//! 2. `Armed` and `Disarmed` alternate for a given gesture; a direction is
//!    never armed twice in a row.
//! 3. `SwipeResult::velocity` and `distance` are always non-negative.

use bitflags::bitflags;
use web_time::Duration;

use crate::geometry::{Axis, Offset, Point};

// ---------------------------------------------------------------------------
// SwipeDirection
// ---------------------------------------------------------------------------

/// Cardinal direction for swipe gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    /// All directions, in registration-slot order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Classify a displacement by its dominant axis.
    ///
    /// Horizontal wins ties; a zero displacement has no direction.
    #[must_use]
    pub fn from_offset(offset: Offset) -> Option<Self> {
        if offset.is_zero() {
            return None;
        }
        Some(match offset.dominant_axis() {
            Axis::Horizontal if offset.dx < 0.0 => Self::Left,
            Axis::Horizontal => Self::Right,
            Axis::Vertical if offset.dy < 0.0 => Self::Up,
            Axis::Vertical => Self::Down,
        })
    }

    /// The single-bit set for this direction.
    #[must_use]
    pub const fn as_set(self) -> DirectionSet {
        match self {
            Self::Up => DirectionSet::UP,
            Self::Down => DirectionSet::DOWN,
            Self::Left => DirectionSet::LEFT,
            Self::Right => DirectionSet::RIGHT,
        }
    }
}

bitflags! {
    /// A set of swipe directions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirectionSet: u8 {
        const LEFT = 0b0001;
        const RIGHT = 0b0010;
        const UP = 0b0100;
        const DOWN = 0b1000;
    }
}

// ---------------------------------------------------------------------------
// SwipeResult
// ---------------------------------------------------------------------------

/// Measurements of one completed gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeResult {
    /// Dominant direction, `None` when the pointer never moved.
    pub direction: Option<SwipeDirection>,
    /// Euclidean length of the displacement, in pixels.
    pub distance: f32,
    /// `distance / duration` in pixels per millisecond (always >= 0.0).
    pub velocity: f32,
    /// Time between down and release.
    pub duration: Duration,
    /// Raw displacement at release.
    pub offset: Offset,
}

impl SwipeResult {
    /// Measure a gesture from its start point to its release point.
    ///
    /// A zero duration is treated as one millisecond so velocity stays finite.
    #[must_use]
    pub fn measure(start: Point, end: Point, duration: Duration) -> Self {
        let offset = end.offset_from(start);
        let distance = offset.magnitude();
        let millis = ((duration.as_secs_f64() * 1000.0) as f32).max(1.0);
        Self {
            direction: SwipeDirection::from_offset(offset),
            distance,
            velocity: distance / millis,
            duration,
            offset,
        }
    }

    /// Whether the release speed reached `threshold` (px/ms).
    #[inline]
    #[must_use]
    pub fn is_fling(&self, threshold: f32) -> bool {
        self.velocity >= threshold
    }

    /// Whether this is a fast, short gesture: quicker than `max_duration`
    /// and longer than `min_distance`.
    #[inline]
    #[must_use]
    pub fn is_flick(&self, max_duration: Duration, min_distance: f32) -> bool {
        self.duration < max_duration && self.distance > min_distance
    }
}

// ---------------------------------------------------------------------------
// SwipeEvent
// ---------------------------------------------------------------------------

/// Notifications published by the recognizers to their subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeEvent {
    /// A pointer went down and tracking began.
    Started { origin: Point },

    /// The gesture crossed the threshold for `direction`.
    Armed { direction: SwipeDirection },

    /// The gesture fell back under the threshold for `direction`.
    Disarmed { direction: SwipeDirection },

    /// The gesture was released.
    Swiped {
        result: SwipeResult,
        /// Direction whose action ran, if any.
        fired: Option<SwipeDirection>,
    },

    /// The gesture was abandoned without firing.
    Cancelled,
}

/// A change in the armed state of a card gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmTransition {
    Armed(SwipeDirection),
    Disarmed(SwipeDirection),
}

impl ArmTransition {
    /// The event published for this transition.
    #[must_use]
    pub const fn to_event(self) -> SwipeEvent {
        match self {
            Self::Armed(direction) => SwipeEvent::Armed { direction },
            Self::Disarmed(direction) => SwipeEvent::Disarmed { direction },
        }
    }
}
