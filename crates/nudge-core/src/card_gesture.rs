#![forbid(unsafe_code)]

//! Swipeable-card gesture: drag a card sideways to reveal and commit an action.
//!
//! [`CardSwipe`] tracks a horizontal drag, damps the visual offset past
//! [`CardSwipeConfig::max_swipe`], and *arms* the action on the side being
//! dragged toward once the visual offset reaches
//! [`CardSwipeConfig::swipe_threshold`]. Releasing while armed commits the
//! action. A quick flick commits even below the threshold.
//!
//! # State Machine
//!
//! ```text
//! Idle → Tracking(unarmed) ⇄ Tracking(armed) → Idle(fired) | Idle(cancelled)
//! ```
//!
//! # Invariants
//!
//! 1. Arming fires its side effect (an [`SwipeEvent::Armed`] notification)
//!    only on the transition, never on repeated updates past the threshold.
//! 2. Falling back under the threshold disarms without firing anything.
//! 3. At most one action runs per release.
//! 4. Offset, armed and dragging state are back to their initial values
//!    after every `end`, `cancel` or `reset`, whether or not anything fired.
//!
//! # Failure Modes
//!
//! - Vertical-dominant drags never arm, so vertical scrolling through a list
//!   of cards is not hijacked.
//! - Actions run synchronously inside `end`; a panicking action unwinds
//!   through the caller and the card is left idle.

use std::fmt;

use web_time::{Duration, Instant};

use crate::event::{InputEvent, PointerPhase, PrimaryPointer};
use crate::geometry::{Axis, Offset, Point, apply_resistance};
use crate::listeners::{Listeners, Subscription};
use crate::semantic_event::{ArmTransition, DirectionSet, SwipeDirection, SwipeEvent, SwipeResult};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for the card gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSwipeConfig {
    /// Visual offset in pixels that arms an action (default: 80).
    pub swipe_threshold: f32,
    /// Offset past which resistance applies (default: 120).
    pub max_swipe: f32,
    /// Scale applied to movement beyond `max_swipe` (default: 0.3).
    pub resistance: f32,
    /// Flicks must be shorter than this (default: 300ms).
    pub flick_max_duration: Duration,
    /// Flicks must travel further than this many pixels (default: 40).
    pub flick_min_distance: f32,
    /// Ignore all input (default: false).
    pub disabled: bool,
}

impl Default for CardSwipeConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 80.0,
            max_swipe: 120.0,
            resistance: 0.3,
            flick_max_duration: Duration::from_millis(300),
            flick_min_distance: 40.0,
            disabled: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// A labelled action bound to one side of the card.
pub struct CardAction {
    label: String,
    handler: Box<dyn FnMut()>,
}

impl CardAction {
    /// Create an action.
    pub fn new(label: impl Into<String>, handler: impl FnMut() + 'static) -> Self {
        Self {
            label: label.into(),
            handler: Box::new(handler),
        }
    }

    /// Text shown when the action is revealed and after it fires.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    fn invoke(&mut self) {
        (self.handler)();
    }
}

impl fmt::Debug for CardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardAction")
            .field("label", &self.label)
            .finish()
    }
}

/// The action that ran on release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredAction {
    pub direction: SwipeDirection,
    pub label: String,
}

/// Result of releasing a card drag.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRelease {
    pub result: SwipeResult,
    /// Whether the release was armed, past the threshold, or a flick.
    pub resolved: bool,
    pub fired: Option<FiredAction>,
}

/// Response to one raw input event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardResponse {
    /// The host should suppress native scrolling for this event.
    pub prevent_default: bool,
    /// Set when the event changed the armed state.
    pub transition: Option<ArmTransition>,
    /// Set when the event released the card.
    pub release: Option<CardRelease>,
}

#[derive(Debug, Clone, Copy)]
struct CardDrag {
    start: Point,
    start_time: Instant,
    current: Point,
}

impl CardDrag {
    fn raw(&self) -> Offset {
        self.current.offset_from(self.start)
    }
}

// ---------------------------------------------------------------------------
// CardSwipe
// ---------------------------------------------------------------------------

/// Card swipe state machine with one optional action per side.
pub struct CardSwipe {
    config: CardSwipeConfig,
    left: Option<CardAction>,
    right: Option<CardAction>,
    pointer: PrimaryPointer,
    drag: Option<CardDrag>,
    offset: f32,
    armed: Option<SwipeDirection>,
    listeners: Listeners<SwipeEvent>,
}

impl fmt::Debug for CardSwipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardSwipe")
            .field("dragging", &self.is_dragging())
            .field("offset", &self.offset)
            .field("armed", &self.armed)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl CardSwipe {
    /// Create a card gesture with no actions.
    #[must_use]
    pub fn new(config: CardSwipeConfig) -> Self {
        Self {
            config,
            left: None,
            right: None,
            pointer: PrimaryPointer::new(),
            drag: None,
            offset: 0.0,
            armed: None,
            listeners: Listeners::new(),
        }
    }

    /// Bind `action` to the side reached by swiping toward `direction`.
    ///
    /// Replaces any existing action on that side. Vertical directions are
    /// rejected and the action is handed back.
    pub fn set_action(
        &mut self,
        direction: SwipeDirection,
        action: CardAction,
    ) -> Result<(), CardAction> {
        match direction {
            SwipeDirection::Left => self.left = Some(action),
            SwipeDirection::Right => self.right = Some(action),
            SwipeDirection::Up | SwipeDirection::Down => return Err(action),
        }
        Ok(())
    }

    /// Builder form of [`set_action`](Self::set_action) for the left side.
    #[must_use]
    pub fn with_left(mut self, action: CardAction) -> Self {
        self.left = Some(action);
        self
    }

    /// Builder form of [`set_action`](Self::set_action) for the right side.
    #[must_use]
    pub fn with_right(mut self, action: CardAction) -> Self {
        self.right = Some(action);
        self
    }

    /// Remove the action for `direction`, returning it.
    pub fn clear_action(&mut self, direction: SwipeDirection) -> Option<CardAction> {
        let removed = self.slot_mut(direction)?.take();
        if removed.is_some() && self.armed == Some(direction) {
            self.transition_to(None);
        }
        removed
    }

    /// The action bound to `direction`, if any.
    #[must_use]
    pub fn action(&self, direction: SwipeDirection) -> Option<&CardAction> {
        match direction {
            SwipeDirection::Left => self.left.as_ref(),
            SwipeDirection::Right => self.right.as_ref(),
            SwipeDirection::Up | SwipeDirection::Down => None,
        }
    }

    /// Sides that have an action.
    #[must_use]
    pub fn registered(&self) -> DirectionSet {
        let mut set = DirectionSet::empty();
        set.set(DirectionSet::LEFT, self.left.is_some());
        set.set(DirectionSet::RIGHT, self.right.is_some());
        set
    }

    /// Start dragging at `pos`.
    ///
    /// Returns `false` if a drag is already active or the card is disabled.
    pub fn begin(&mut self, pos: Point, now: Instant) -> bool {
        if self.config.disabled || self.drag.is_some() {
            return false;
        }
        self.drag = Some(CardDrag {
            start: pos,
            start_time: now,
            current: pos,
        });
        self.offset = 0.0;
        self.armed = None;
        #[cfg(feature = "tracing")]
        tracing::trace!(x = pos.x, y = pos.y, "card drag started");
        self.listeners.emit(&SwipeEvent::Started { origin: pos });
        true
    }

    /// Move the drag to `pos`, updating the visual offset and armed state.
    ///
    /// Returns the armed-state transition this move caused, if any.
    pub fn update(&mut self, pos: Point) -> Option<ArmTransition> {
        if self.config.disabled {
            return None;
        }
        let drag = self.drag.as_mut()?;
        drag.current = pos;
        let raw = drag.raw();

        self.offset = apply_resistance(raw.dx, self.config.max_swipe, self.config.resistance);

        let target = if raw.dominant_axis() == Axis::Horizontal
            && raw.dx != 0.0
            && self.offset.abs() >= self.config.swipe_threshold
        {
            Some(Self::side_of(raw.dx)).filter(|&dir| self.action(dir).is_some())
        } else {
            None
        };
        self.transition_to(target)
    }

    /// Release the drag, committing the armed (or flicked) action.
    ///
    /// Returns `None` if no drag was active.
    pub fn end(&mut self, now: Instant) -> Option<CardRelease> {
        if self.config.disabled {
            return None;
        }
        let drag = self.drag.take()?;
        self.pointer.release();

        let duration = now.saturating_duration_since(drag.start_time);
        let result = SwipeResult::measure(drag.start, drag.current, duration);
        let raw = result.offset;
        let horizontal = raw.dominant_axis() == Axis::Horizontal && raw.dx != 0.0;

        // Judged on the damped offset, the same measure that arms.
        let visual = apply_resistance(raw.dx, self.config.max_swipe, self.config.resistance);
        let past_threshold = horizontal && visual.abs() >= self.config.swipe_threshold;
        let flick = horizontal
            && result.is_flick(self.config.flick_max_duration, self.config.flick_min_distance);
        let resolved = self.armed.is_some() || past_threshold || flick;

        let target = self
            .armed
            .or_else(|| (resolved && horizontal).then(|| Self::side_of(raw.dx)));
        let fired = target.and_then(|direction| {
            let action = self.slot_mut(direction)?.as_mut()?;
            action.invoke();
            Some(FiredAction {
                direction,
                label: action.label.clone(),
            })
        });

        self.offset = 0.0;
        self.armed = None;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dx = raw.dx,
            duration_ms = duration.as_millis() as u64,
            resolved,
            flick,
            fired = ?fired.as_ref().map(|f| f.direction),
            "card released"
        );

        self.listeners.emit(&SwipeEvent::Swiped {
            result,
            fired: fired.as_ref().map(|f| f.direction),
        });

        Some(CardRelease {
            result,
            resolved,
            fired,
        })
    }

    /// Abandon the drag without firing. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        self.pointer.release();
        self.offset = 0.0;
        self.armed = None;
        if self.drag.take().is_none() {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!("card drag cancelled");
        self.listeners.emit(&SwipeEvent::Cancelled);
        true
    }

    /// Return to idle silently.
    pub fn reset(&mut self) {
        self.pointer.release();
        self.drag = None;
        self.offset = 0.0;
        self.armed = None;
    }

    /// Drive the card from a raw input event.
    pub fn process(&mut self, event: &InputEvent, now: Instant) -> CardResponse {
        if self.config.disabled {
            return CardResponse::default();
        }
        let Some(phase) = self.pointer.filter(event) else {
            return CardResponse::default();
        };

        match phase {
            PointerPhase::Begin(pos) => {
                self.begin(pos, now);
                CardResponse::default()
            }
            PointerPhase::Move(pos) => {
                let transition = self.update(pos);
                CardResponse {
                    prevent_default: self.is_horizontal_drag(),
                    transition,
                    release: None,
                }
            }
            PointerPhase::End(pos) => {
                let transition = self.update(pos);
                CardResponse {
                    prevent_default: false,
                    transition,
                    release: self.end(now),
                }
            }
            PointerPhase::Cancel => {
                self.cancel();
                CardResponse::default()
            }
        }
    }

    /// Visual horizontal offset, with resistance applied.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The side currently armed.
    #[inline]
    #[must_use]
    pub fn armed(&self) -> Option<SwipeDirection> {
        self.armed
    }

    /// Whether a drag is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Enable or disable the card. Disabling mid-drag abandons the drag.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && !self.config.disabled {
            self.cancel();
        }
        self.config.disabled = disabled;
    }

    /// Subscribe to gesture events (`Started`, `Armed`, `Disarmed`, ...).
    #[must_use = "dropping the subscription detaches the listener immediately"]
    pub fn subscribe(&self, listener: impl FnMut(&SwipeEvent) + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CardSwipeConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: CardSwipeConfig) {
        let disabled = config.disabled;
        self.config = CardSwipeConfig {
            disabled: self.config.disabled,
            ..config
        };
        self.set_disabled(disabled);
    }

    fn is_horizontal_drag(&self) -> bool {
        self.drag
            .as_ref()
            .is_some_and(|drag| drag.raw().dominant_axis() == Axis::Horizontal)
    }

    fn side_of(dx: f32) -> SwipeDirection {
        if dx < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    }

    fn slot_mut(&mut self, direction: SwipeDirection) -> Option<&mut Option<CardAction>> {
        match direction {
            SwipeDirection::Left => Some(&mut self.left),
            SwipeDirection::Right => Some(&mut self.right),
            SwipeDirection::Up | SwipeDirection::Down => None,
        }
    }

    fn transition_to(&mut self, target: Option<SwipeDirection>) -> Option<ArmTransition> {
        if target == self.armed {
            return None;
        }
        let previous = std::mem::replace(&mut self.armed, target);
        if let Some(prev) = previous {
            self.listeners
                .emit(&ArmTransition::Disarmed(prev).to_event());
        }
        match target {
            Some(direction) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(?direction, offset = self.offset, "card armed");
                let transition = ArmTransition::Armed(direction);
                self.listeners.emit(&transition.to_event());
                Some(transition)
            }
            None => previous.map(ArmTransition::Disarmed),
        }
    }
}

impl Default for CardSwipe {
    fn default() -> Self {
        Self::new(CardSwipeConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{PointerEvent, PointerEventKind};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_500: Duration = Duration::from_millis(500);

    fn counting(label: &str) -> (Rc<Cell<u32>>, CardAction) {
        let hits = Rc::new(Cell::new(0));
        let inner = Rc::clone(&hits);
        (hits, CardAction::new(label, move || inner.set(inner.get() + 1)))
    }

    fn card() -> (CardSwipe, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let (left, archive) = counting("Archive");
        let (right, paid) = counting("Mark paid");
        let card = CardSwipe::default().with_left(archive).with_right(paid);
        (card, left, right)
    }

    fn recorded(card: &CardSwipe) -> (Rc<RefCell<Vec<SwipeEvent>>>, Subscription) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let sub = card.subscribe(move |e| sink.borrow_mut().push(e.clone()));
        (events, sub)
    }

    fn pointer(kind: PointerEventKind, x: f32, y: f32) -> InputEvent {
        InputEvent::Pointer(PointerEvent::new(kind, 1, x, y))
    }

    #[test]
    fn resistance_scales_visual_offset() {
        let (mut card, _, _) = card();
        card.begin(Point::new(0.0, 0.0), Instant::now());
        card.update(Point::new(200.0, 0.0));
        assert!((card.offset() - 144.0).abs() < 1e-3);
    }

    #[test]
    fn release_threshold_uses_damped_offset() {
        let config = CardSwipeConfig {
            swipe_threshold: 80.0,
            max_swipe: 60.0,
            ..CardSwipeConfig::default()
        };
        let (hits, action) = counting("Mark paid");
        let mut card = CardSwipe::new(config).with_right(action);
        let (events, _sub) = recorded(&card);
        let t = Instant::now();

        // Raw 100 px damps to 72 px: past the raw threshold but never armed.
        card.begin(Point::new(0.0, 0.0), t);
        assert_eq!(card.update(Point::new(100.0, 0.0)), None);
        let release = card.end(t + MS_500).unwrap();
        assert!(!release.resolved);
        assert_eq!(hits.get(), 0);

        // Raw 130 px damps to 81 px, which arms before it fires.
        card.begin(Point::new(0.0, 0.0), t);
        assert_eq!(
            card.update(Point::new(130.0, 0.0)),
            Some(ArmTransition::Armed(SwipeDirection::Right))
        );
        assert!(card.end(t + MS_500).unwrap().resolved);
        assert_eq!(hits.get(), 1);
        let armed = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, SwipeEvent::Armed { .. }))
            .count();
        assert_eq!(armed, 1);
    }

    #[test]
    fn offset_tracks_raw_below_cap() {
        let (mut card, _, _) = card();
        card.begin(Point::new(50.0, 0.0), Instant::now());
        card.update(Point::new(-10.0, 5.0));
        assert_eq!(card.offset(), -60.0);
        assert_eq!(card.armed(), None);
    }

    #[test]
    fn crossing_threshold_arms_matching_side() {
        let (mut card, _, _) = card();
        card.begin(Point::new(200.0, 0.0), Instant::now());
        assert_eq!(card.update(Point::new(150.0, 0.0)), None);
        assert_eq!(
            card.update(Point::new(110.0, 0.0)),
            Some(ArmTransition::Armed(SwipeDirection::Left))
        );
        assert_eq!(card.armed(), Some(SwipeDirection::Left));
    }

    #[test]
    fn arming_is_idempotent() {
        let (mut card, _, _) = card();
        let (events, _sub) = recorded(&card);
        card.begin(Point::new(0.0, 0.0), Instant::now());
        for x in [90.0, 100.0, 130.0, 250.0] {
            card.update(Point::new(x, 0.0));
        }
        let armed = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, SwipeEvent::Armed { .. }))
            .count();
        assert_eq!(armed, 1);
    }

    #[test]
    fn dropping_back_disarms_without_firing() {
        let (mut card, left, right) = card();
        let (events, _sub) = recorded(&card);
        let t = Instant::now();
        card.begin(Point::new(0.0, 0.0), t);
        card.update(Point::new(100.0, 0.0));
        assert_eq!(
            card.update(Point::new(20.0, 0.0)),
            Some(ArmTransition::Disarmed(SwipeDirection::Right))
        );
        assert_eq!(card.armed(), None);
        assert_eq!(left.get() + right.get(), 0);
        assert!(events.borrow().contains(&SwipeEvent::Disarmed {
            direction: SwipeDirection::Right
        }));

        let release = card.end(t + MS_500).unwrap();
        assert!(!release.resolved);
        assert_eq!(release.fired, None);
        assert_eq!(right.get(), 0);
    }

    #[test]
    fn release_while_armed_fires_once() {
        let (mut card, left, right) = card();
        let t = Instant::now();
        card.begin(Point::new(0.0, 0.0), t);
        card.update(Point::new(95.0, 10.0));
        let release = card.end(t + MS_500).unwrap();

        assert!(release.resolved);
        assert_eq!(
            release.fired,
            Some(FiredAction {
                direction: SwipeDirection::Right,
                label: "Mark paid".into(),
            })
        );
        assert_eq!(right.get(), 1);
        assert_eq!(left.get(), 0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let (mut card, _, right) = card();
        let t = Instant::now();
        card.begin(Point::new(0.0, 0.0), t);
        card.update(Point::new(80.0, 0.0));
        assert_eq!(card.armed(), Some(SwipeDirection::Right));
        card.end(t + MS_500);
        assert_eq!(right.get(), 1);
    }

    #[test]
    fn flick_fires_below_threshold() {
        let (mut card, left, _) = card();
        let t = Instant::now();
        card.begin(Point::new(100.0, 0.0), t);
        card.update(Point::new(50.0, 0.0));
        assert_eq!(card.armed(), None);
        let release = card.end(t + MS_100).unwrap();
        assert!(release.resolved);
        assert_eq!(release.fired.map(|f| f.direction), Some(SwipeDirection::Left));
        assert_eq!(left.get(), 1);
    }

    #[test]
    fn slow_short_drag_does_not_fire() {
        let (mut card, left, right) = card();
        let t = Instant::now();
        card.begin(Point::new(0.0, 0.0), t);
        card.update(Point::new(50.0, 0.0));
        let release = card.end(t + MS_500).unwrap();
        assert!(!release.resolved);
        assert_eq!(left.get() + right.get(), 0);
    }

    #[test]
    fn vertical_drag_never_arms() {
        let (mut card, left, right) = card();
        let t = Instant::now();
        card.begin(Point::new(0.0, 0.0), t);
        assert_eq!(card.update(Point::new(90.0, 200.0)), None);
        let release = card.end(t + MS_100).unwrap();
        assert!(!release.resolved);
        assert_eq!(left.get() + right.get(), 0);
    }

    #[test]
    fn side_without_action_does_not_arm() {
        let (right, paid) = counting("Mark paid");
        let mut card = CardSwipe::default().with_right(paid);
        let t = Instant::now();
        card.begin(Point::new(0.0, 0.0), t);
        assert_eq!(card.update(Point::new(-150.0, 0.0)), None);
        let release = card.end(t + MS_500).unwrap();
        assert!(release.resolved);
        assert_eq!(release.fired, None);
        assert_eq!(right.get(), 0);
    }

    #[test]
    fn state_resets_after_release() {
        let (mut card, _, _) = card();
        let t = Instant::now();
        card.begin(Point::new(0.0, 0.0), t);
        card.update(Point::new(150.0, 0.0));
        assert!(card.is_dragging());
        card.end(t + MS_500);
        assert!(!card.is_dragging());
        assert_eq!(card.offset(), 0.0);
        assert_eq!(card.armed(), None);
    }

    #[test]
    fn cancel_abandons_armed_drag() {
        let (mut card, left, right) = card();
        let (events, _sub) = recorded(&card);
        card.begin(Point::new(0.0, 0.0), Instant::now());
        card.update(Point::new(150.0, 0.0));
        assert!(card.cancel());
        assert!(!card.cancel());
        assert_eq!(card.offset(), 0.0);
        assert_eq!(left.get() + right.get(), 0);
        assert_eq!(events.borrow().last(), Some(&SwipeEvent::Cancelled));
    }

    #[test]
    fn disabling_mid_drag_abandons() {
        let (mut card, _, right) = card();
        let t = Instant::now();
        card.begin(Point::new(0.0, 0.0), t);
        card.update(Point::new(150.0, 0.0));
        card.set_disabled(true);
        assert!(!card.is_dragging());
        assert!(card.end(t + MS_100).is_none());
        assert!(!card.begin(Point::new(0.0, 0.0), t));
        assert_eq!(right.get(), 0);
    }

    #[test]
    fn jump_across_zero_rearms_other_side() {
        let (mut card, _, _) = card();
        let (events, _sub) = recorded(&card);
        card.begin(Point::new(0.0, 0.0), Instant::now());
        card.update(Point::new(100.0, 0.0));
        assert_eq!(
            card.update(Point::new(-100.0, 0.0)),
            Some(ArmTransition::Armed(SwipeDirection::Left))
        );
        let events = events.borrow();
        assert_eq!(
            &events[1..],
            &[
                SwipeEvent::Armed {
                    direction: SwipeDirection::Right
                },
                SwipeEvent::Disarmed {
                    direction: SwipeDirection::Right
                },
                SwipeEvent::Armed {
                    direction: SwipeDirection::Left
                },
            ]
        );
    }

    #[test]
    fn clearing_armed_action_disarms() {
        let (mut card, _, _) = card();
        card.begin(Point::new(0.0, 0.0), Instant::now());
        card.update(Point::new(100.0, 0.0));
        let removed = card.clear_action(SwipeDirection::Right);
        assert_eq!(removed.map(|a| a.label().to_owned()), Some("Mark paid".into()));
        assert_eq!(card.armed(), None);
        assert_eq!(card.registered(), DirectionSet::LEFT);
    }

    #[test]
    fn vertical_actions_are_rejected() {
        let mut card = CardSwipe::default();
        let action = CardAction::new("Snooze", || {});
        let rejected = card.set_action(SwipeDirection::Up, action).unwrap_err();
        assert_eq!(rejected.label(), "Snooze");
        assert!(card.registered().is_empty());
        assert!(card.set_action(SwipeDirection::Left, rejected).is_ok());
        assert_eq!(card.registered(), DirectionSet::LEFT);
    }

    #[test]
    fn process_drives_full_interaction() {
        let (mut card, left, _) = card();
        let t = Instant::now();
        card.process(&pointer(PointerEventKind::Down, 300.0, 50.0), t);
        let response = card.process(&pointer(PointerEventKind::Move, 200.0, 55.0), t + MS_100);
        assert!(response.prevent_default);
        assert_eq!(
            response.transition,
            Some(ArmTransition::Armed(SwipeDirection::Left))
        );
        let response = card.process(&pointer(PointerEventKind::Up, 190.0, 55.0), t + MS_500);
        let release = response.release.unwrap();
        assert_eq!(release.fired.map(|f| f.label), Some("Archive".to_string()));
        assert_eq!(left.get(), 1);
    }

    #[test]
    fn vertical_move_does_not_prevent_scroll() {
        let (mut card, _, _) = card();
        let t = Instant::now();
        card.process(&pointer(PointerEventKind::Down, 0.0, 0.0), t);
        let response = card.process(&pointer(PointerEventKind::Move, 5.0, 40.0), t);
        assert!(!response.prevent_default);
    }

    #[test]
    fn default_config_values() {
        let config = CardSwipeConfig::default();
        assert_eq!(config.swipe_threshold, 80.0);
        assert_eq!(config.max_swipe, 120.0);
        assert_eq!(config.resistance, 0.3);
        assert_eq!(config.flick_max_duration, Duration::from_millis(300));
        assert_eq!(config.flick_min_distance, 40.0);
    }
}
