#![forbid(unsafe_code)]

//! Swipe recognition: turns a pointer stream into directional swipes.
//!
//! [`SwipeRecognizer`] is a stateful processor. Feed it raw [`InputEvent`]s
//! through [`process`](SwipeRecognizer::process), or drive it directly with
//! [`begin`](SwipeRecognizer::begin) / [`update`](SwipeRecognizer::update) /
//! [`end`](SwipeRecognizer::end). On release it classifies the gesture and
//! invokes the action registered for the resolved direction.
//!
//! # State Machine
//!
//! ```text
//! Idle --begin--> Tracking --update--> Tracking --end--> Idle (fired | not fired)
//!                     \------cancel / disable / focus loss------> Idle (cancelled)
//! ```
//!
//! # Invariants
//!
//! 1. At most one gesture is tracked at a time; `begin` while tracking is a
//!    no-op.
//! 2. A release invokes at most one action, exactly once.
//! 3. After `end`, `cancel`, or `reset` no transient state survives. Only the
//!    registered actions and the configuration carry across gestures.
//! 4. A disabled recognizer ignores every input.
//!
//! # Resolution
//!
//! A release resolves when the displacement along the dominant axis is
//! strictly greater than [`SwipeConfig::threshold`], or when the gesture is
//! a flick: shorter than [`SwipeConfig::flick_max_duration`] and longer than
//! [`SwipeConfig::flick_min_distance`].

use std::fmt;

use web_time::{Duration, Instant};

use crate::event::{InputEvent, PointerPhase, PrimaryPointer};
use crate::geometry::Point;
use crate::listeners::{Listeners, Subscription};
use crate::semantic_event::{DirectionSet, SwipeDirection, SwipeEvent, SwipeResult};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for swipe recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeConfig {
    /// Minimum dominant-axis displacement in pixels (default: 50).
    pub threshold: f32,
    /// Release speed in px/ms above which a swipe counts as a fling
    /// (default: 0.3). Reported on the outcome; does not gate resolution.
    pub velocity_threshold: f32,
    /// Flicks must be shorter than this (default: 300ms).
    pub flick_max_duration: Duration,
    /// Flicks must travel further than this many pixels (default: 40).
    pub flick_min_distance: f32,
    /// Suppress native scrolling while a gesture is tracked (default: false).
    pub prevent_scroll: bool,
    /// Ignore all input (default: false).
    pub disabled: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            velocity_threshold: 0.3,
            flick_max_duration: Duration::from_millis(300),
            flick_min_distance: 40.0,
            prevent_scroll: false,
            disabled: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

type Action = Box<dyn FnMut()>;

/// One callback slot per direction. Registering replaces the previous one.
#[derive(Default)]
pub struct SwipeActions {
    left: Option<Action>,
    right: Option<Action>,
    up: Option<Action>,
    down: Option<Action>,
}

impl SwipeActions {
    /// Create an empty action table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn on(mut self, direction: SwipeDirection, action: impl FnMut() + 'static) -> Self {
        self.set(direction, action);
        self
    }

    /// Register the action for `direction`, replacing any previous one.
    pub fn set(&mut self, direction: SwipeDirection, action: impl FnMut() + 'static) {
        *self.slot_mut(direction) = Some(Box::new(action));
    }

    /// Remove the action for `direction`. Returns whether one was registered.
    pub fn clear(&mut self, direction: SwipeDirection) -> bool {
        self.slot_mut(direction).take().is_some()
    }

    /// Directions that currently have an action.
    #[must_use]
    pub fn registered(&self) -> DirectionSet {
        SwipeDirection::ALL
            .into_iter()
            .filter(|&dir| self.slot(dir).is_some())
            .fold(DirectionSet::empty(), |set, dir| set | dir.as_set())
    }

    /// Invoke the action for `direction`. Returns whether one ran.
    pub fn invoke(&mut self, direction: SwipeDirection) -> bool {
        match self.slot_mut(direction) {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }

    fn slot(&self, direction: SwipeDirection) -> &Option<Action> {
        match direction {
            SwipeDirection::Left => &self.left,
            SwipeDirection::Right => &self.right,
            SwipeDirection::Up => &self.up,
            SwipeDirection::Down => &self.down,
        }
    }

    fn slot_mut(&mut self, direction: SwipeDirection) -> &mut Option<Action> {
        match direction {
            SwipeDirection::Left => &mut self.left,
            SwipeDirection::Right => &mut self.right,
            SwipeDirection::Up => &mut self.up,
            SwipeDirection::Down => &mut self.down,
        }
    }
}

impl fmt::Debug for SwipeActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeActions")
            .field("registered", &self.registered())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// What a completed gesture amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeOutcome {
    pub result: SwipeResult,
    /// Whether the gesture passed the distance or flick test.
    pub resolved: bool,
    /// Whether the release speed reached the velocity threshold.
    pub fling: bool,
    /// Direction whose action ran, if any.
    pub fired: Option<SwipeDirection>,
}

/// Response to one raw input event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventResponse {
    /// The host should call `preventDefault` (suppress native scroll).
    pub prevent_default: bool,
    /// Set when the event completed a gesture.
    pub outcome: Option<SwipeOutcome>,
}

/// An in-progress gesture.
#[derive(Debug, Clone, Copy)]
struct GestureSample {
    start: Point,
    start_time: Instant,
    current: Point,
}

// ---------------------------------------------------------------------------
// SwipeRecognizer
// ---------------------------------------------------------------------------

/// Stateful recognizer for directional swipes.
pub struct SwipeRecognizer {
    config: SwipeConfig,
    actions: SwipeActions,
    pointer: PrimaryPointer,
    sample: Option<GestureSample>,
    listeners: Listeners<SwipeEvent>,
}

impl fmt::Debug for SwipeRecognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeRecognizer")
            .field("tracking", &self.is_tracking())
            .field("disabled", &self.config.disabled)
            .field("actions", &self.actions)
            .finish()
    }
}

impl SwipeRecognizer {
    /// Create a recognizer with the given configuration and no actions.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self::with_actions(config, SwipeActions::new())
    }

    /// Create a recognizer with an action table.
    #[must_use]
    pub fn with_actions(config: SwipeConfig, actions: SwipeActions) -> Self {
        Self {
            config,
            actions,
            pointer: PrimaryPointer::new(),
            sample: None,
            listeners: Listeners::new(),
        }
    }

    /// Start tracking at `pos`.
    ///
    /// Returns `false` (and does nothing) if a gesture is already active or
    /// the recognizer is disabled.
    pub fn begin(&mut self, pos: Point, now: Instant) -> bool {
        if self.config.disabled || self.sample.is_some() {
            return false;
        }
        self.sample = Some(GestureSample {
            start: pos,
            start_time: now,
            current: pos,
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(x = pos.x, y = pos.y, "swipe tracking started");
        self.listeners.emit(&SwipeEvent::Started { origin: pos });
        true
    }

    /// Record the current pointer position.
    ///
    /// Returns whether native scrolling should be suppressed for this move.
    pub fn update(&mut self, pos: Point) -> bool {
        if self.config.disabled {
            return false;
        }
        match self.sample.as_mut() {
            Some(sample) => {
                sample.current = pos;
                self.config.prevent_scroll
            }
            None => false,
        }
    }

    /// Close the gesture, classify it, and fire the matching action.
    ///
    /// Returns `None` if no gesture was active.
    pub fn end(&mut self, now: Instant) -> Option<SwipeOutcome> {
        if self.config.disabled {
            return None;
        }
        let sample = self.sample.take()?;
        self.pointer.release();

        let duration = now.saturating_duration_since(sample.start_time);
        let result = SwipeResult::measure(sample.start, sample.current, duration);
        let resolved = result.offset.dominant_extent() > self.config.threshold
            || result.is_flick(self.config.flick_max_duration, self.config.flick_min_distance);

        let fired = match result.direction {
            Some(direction) if resolved && self.actions.invoke(direction) => Some(direction),
            _ => None,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            direction = ?result.direction,
            distance = result.distance,
            velocity = result.velocity,
            resolved,
            fired = ?fired,
            "swipe released"
        );

        self.listeners.emit(&SwipeEvent::Swiped { result, fired });
        Some(SwipeOutcome {
            result,
            resolved,
            fling: result.is_fling(self.config.velocity_threshold),
            fired,
        })
    }

    /// Abandon the in-flight gesture without firing.
    ///
    /// Returns whether a gesture was active.
    pub fn cancel(&mut self) -> bool {
        self.pointer.release();
        if self.sample.take().is_none() {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!("swipe cancelled");
        self.listeners.emit(&SwipeEvent::Cancelled);
        true
    }

    /// Return to idle. Silent: no event is published.
    pub fn reset(&mut self) {
        self.pointer.release();
        self.sample = None;
    }

    /// Drive the recognizer from a raw input event.
    pub fn process(&mut self, event: &InputEvent, now: Instant) -> EventResponse {
        if self.config.disabled {
            return EventResponse::default();
        }
        let Some(phase) = self.pointer.filter(event) else {
            return EventResponse::default();
        };

        match phase {
            PointerPhase::Begin(pos) => {
                self.begin(pos, now);
                EventResponse::default()
            }
            PointerPhase::Move(pos) => EventResponse {
                prevent_default: self.update(pos),
                outcome: None,
            },
            PointerPhase::End(pos) => {
                self.update(pos);
                EventResponse {
                    prevent_default: false,
                    outcome: self.end(now),
                }
            }
            PointerPhase::Cancel => {
                self.cancel();
                EventResponse::default()
            }
        }
    }

    /// Whether a gesture is currently tracked.
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.sample.is_some()
    }

    /// Whether native scrolling should currently be suppressed.
    #[inline]
    #[must_use]
    pub fn should_prevent_scroll(&self) -> bool {
        self.config.prevent_scroll && !self.config.disabled && self.is_tracking()
    }

    /// Enable or disable recognition. Disabling mid-gesture abandons the
    /// gesture without firing.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && !self.config.disabled {
            self.cancel();
        }
        self.config.disabled = disabled;
    }

    /// Subscribe to gesture events.
    #[must_use = "dropping the subscription detaches the listener immediately"]
    pub fn subscribe(&self, listener: impl FnMut(&SwipeEvent) + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    /// Registered actions.
    #[must_use]
    pub fn actions(&self) -> &SwipeActions {
        &self.actions
    }

    /// Mutable access to the registered actions.
    pub fn actions_mut(&mut self) -> &mut SwipeActions {
        &mut self.actions
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Update the configuration. Goes through [`set_disabled`] so that
    /// disabling still abandons an in-flight gesture.
    ///
    /// [`set_disabled`]: Self::set_disabled
    pub fn set_config(&mut self, config: SwipeConfig) {
        let disabled = config.disabled;
        self.config = SwipeConfig {
            disabled: self.config.disabled,
            ..config
        };
        self.set_disabled(disabled);
    }
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
