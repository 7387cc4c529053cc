#![forbid(unsafe_code)]

//! Transient "action done" indicator shown after a card swipe fires.
//!
//! Only one indicator is ever visible. Showing a new one replaces the
//! current indicator and restarts the dismiss countdown.

use nudge_core::semantic_event::SwipeDirection;
use nudge_runtime::timer::Deferred;
use web_time::{Duration, Instant};

/// How long an indicator stays up by default.
pub const DEFAULT_FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// What the indicator shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackIndicator {
    pub label: String,
    pub direction: SwipeDirection,
}

impl FeedbackIndicator {
    pub fn new(label: impl Into<String>, direction: SwipeDirection) -> Self {
        Self {
            label: label.into(),
            direction,
        }
    }
}

/// Auto-dismissing feedback slot.
#[derive(Debug, Clone)]
pub struct SwipeFeedback {
    timer: Deferred<FeedbackIndicator>,
    duration: Duration,
}

impl SwipeFeedback {
    /// Create an empty slot with the given display duration.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            timer: Deferred::new(),
            duration,
        }
    }

    /// Show `indicator` until `now + duration`, replacing any current one.
    pub fn show(&mut self, indicator: FeedbackIndicator, now: Instant) {
        tracing::debug!(
            label = %indicator.label,
            direction = ?indicator.direction,
            "swipe feedback shown"
        );
        self.timer.schedule(indicator, now, self.duration);
    }

    /// Advance time. Returns the indicator that just expired, if any.
    pub fn tick(&mut self, now: Instant) -> Option<FeedbackIndicator> {
        self.timer.poll(now)
    }

    /// Hide the current indicator immediately and cancel its timer.
    pub fn dismiss(&mut self) -> Option<FeedbackIndicator> {
        self.timer.cancel()
    }

    /// The indicator currently on screen.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&FeedbackIndicator> {
        self.timer.peek()
    }

    /// Whether an indicator is on screen.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.timer.is_pending()
    }

    /// Time left before the current indicator hides.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the display duration for indicators shown from now on.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}

impl Default for SwipeFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_DURATION)
    }
}
