#![forbid(unsafe_code)]

//! Swipeable card widget.
//!
//! Wraps a [`CardSwipe`] state machine into a mounted component:
//!
//! - **mount** subscribes the haptics seam to arming transitions.
//! - **handle** feeds raw input; a fired action raises a [`SwipeFeedback`]
//!   indicator.
//! - **tick** expires the indicator.
//! - **unmount** cancels the pending indicator, abandons any in-flight drag
//!   without firing and drops every subscription.
//!
//! Input is ignored while the card is not mounted.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use nudge_core::card_gesture::{CardAction, CardSwipe, CardSwipeConfig};
//! use nudge_core::event::{InputEvent, PointerEvent, PointerEventKind};
//! use nudge_widgets::haptics::NoHaptics;
//! use nudge_widgets::swipeable_card::SwipeableCard;
//! use web_time::{Duration, Instant};
//!
//! let card = CardSwipe::new(CardSwipeConfig::default())
//!     .with_right(CardAction::new("Mark paid", || {}));
//! let mut widget = SwipeableCard::new(card, Rc::new(NoHaptics));
//! widget.mount();
//!
//! let t = Instant::now();
//! let ev = |kind, x| InputEvent::Pointer(PointerEvent::new(kind, 1, x, 0.0));
//! widget.handle(&ev(PointerEventKind::Down, 0.0), t);
//! widget.handle(&ev(PointerEventKind::Move, 100.0), t);
//! widget.handle(&ev(PointerEventKind::Up, 100.0), t + Duration::from_millis(400));
//!
//! assert_eq!(widget.view().feedback.map(|f| f.label).as_deref(), Some("Mark paid"));
//! ```

use std::fmt;
use std::rc::Rc;

use nudge_core::card_gesture::{CardResponse, CardSwipe};
use nudge_core::event::InputEvent;
use nudge_core::listeners::Subscription;
use nudge_core::semantic_event::{SwipeDirection, SwipeEvent};
use web_time::{Duration, Instant};

use crate::haptics::{HapticPattern, Haptics};
use crate::swipe_feedback::{FeedbackIndicator, SwipeFeedback};

/// Snapshot of everything needed to draw the card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Horizontal translation, resistance applied.
    pub offset: f32,
    pub armed: Option<SwipeDirection>,
    /// Label of the armed action, for the reveal hint.
    pub armed_label: Option<String>,
    pub dragging: bool,
    pub feedback: Option<FeedbackIndicator>,
}

/// A card that can be swiped left or right to run an action.
pub struct SwipeableCard {
    card: CardSwipe,
    feedback: SwipeFeedback,
    haptics: Rc<dyn Haptics>,
    haptic_pattern: HapticPattern,
    haptics_enabled: bool,
    subscriptions: Vec<Subscription>,
    mounted: bool,
}

impl fmt::Debug for SwipeableCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeableCard")
            .field("card", &self.card)
            .field("feedback", &self.feedback.current())
            .field("haptics_enabled", &self.haptics_enabled)
            .field("subscriptions", &self.subscriptions.len())
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl SwipeableCard {
    /// Wrap `card`. The widget starts unmounted.
    pub fn new(card: CardSwipe, haptics: Rc<dyn Haptics>) -> Self {
        Self {
            card,
            feedback: SwipeFeedback::default(),
            haptics,
            haptic_pattern: HapticPattern::Tick,
            haptics_enabled: true,
            subscriptions: Vec::new(),
            mounted: false,
        }
    }

    /// Set how long the post-action indicator stays up.
    #[must_use]
    pub fn with_feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback.set_duration(duration);
        self
    }

    /// Set the pattern played when an action arms.
    #[must_use]
    pub fn with_haptic_pattern(mut self, pattern: HapticPattern) -> Self {
        self.haptic_pattern = pattern;
        self
    }

    /// Turn arming haptics on or off. Takes effect on the next mount.
    #[must_use]
    pub fn with_haptics_enabled(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    /// Attach to the host. Calling it again while mounted does nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        if self.haptics_enabled {
            let haptics = Rc::clone(&self.haptics);
            let pattern = self.haptic_pattern;
            self.subscriptions.push(self.card.subscribe(move |event| {
                if matches!(event, SwipeEvent::Armed { .. }) {
                    haptics.pulse(pattern);
                }
            }));
        }
        self.mounted = true;
        tracing::trace!("swipeable card mounted");
    }

    /// Detach from the host.
    ///
    /// Pending feedback is cancelled and an in-flight drag is abandoned
    /// without firing. Subscriptions made through [`Self::subscribe`] are
    /// dropped as well.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.feedback.dismiss();
        self.card.cancel();
        self.subscriptions.clear();
        self.mounted = false;
        tracing::trace!("swipeable card unmounted");
    }

    /// Feed one raw input event.
    pub fn handle(&mut self, event: &InputEvent, now: Instant) -> CardResponse {
        if !self.mounted {
            return CardResponse::default();
        }
        let response = self.card.process(event, now);
        if let Some(fired) = response.release.as_ref().and_then(|r| r.fired.as_ref()) {
            tracing::info!(direction = ?fired.direction, label = %fired.label, "card action fired");
            self.feedback.show(
                FeedbackIndicator::new(fired.label.clone(), fired.direction),
                now,
            );
        }
        response
    }

    /// Advance time. Returns the indicator that just expired, if any.
    pub fn tick(&mut self, now: Instant) -> Option<FeedbackIndicator> {
        self.feedback.tick(now)
    }

    /// Current render state.
    #[must_use]
    pub fn view(&self) -> CardView {
        let armed = self.card.armed();
        CardView {
            offset: self.card.offset(),
            armed,
            armed_label: armed
                .and_then(|dir| self.card.action(dir))
                .map(|action| action.label().to_owned()),
            dragging: self.card.is_dragging(),
            feedback: self.feedback.current().cloned(),
        }
    }

    /// Observe the card's events for as long as the widget stays mounted.
    pub fn subscribe(&mut self, listener: impl FnMut(&SwipeEvent) + 'static) {
        self.subscriptions.push(self.card.subscribe(listener));
    }

    #[inline]
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The wrapped state machine.
    #[must_use]
    pub fn card(&self) -> &CardSwipe {
        &self.card
    }

    /// Mutable access, e.g. to swap actions.
    pub fn card_mut(&mut self) -> &mut CardSwipe {
        &mut self.card
    }

    #[must_use]
    pub fn feedback(&self) -> &SwipeFeedback {
        &self.feedback
    }
}

impl Drop for SwipeableCard {
    fn drop(&mut self) {
        self.unmount();
    }
}
