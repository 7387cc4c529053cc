#![forbid(unsafe_code)]

//! Tick-driven deferred callbacks.
//!
//! A [`Deferred`] holds at most one pending deadline together with the
//! payload to deliver when it passes. Scheduling again *supersedes* the
//! pending deadline instead of stacking a second one, which is exactly the
//! behavior transient UI feedback needs: a new toast or indicator restarts
//! the dismiss countdown.
//!
//! There is no background thread. The host polls from its event loop:
//!
//! ```
//! use nudge_runtime::timer::Deferred;
//! use web_time::{Duration, Instant};
//!
//! let mut dismiss = Deferred::new();
//! let t = Instant::now();
//! dismiss.schedule("hide", t, Duration::from_millis(1500));
//!
//! assert_eq!(dismiss.poll(t + Duration::from_millis(1000)), None);
//! assert_eq!(dismiss.poll(t + Duration::from_millis(1500)), Some("hide"));
//! assert_eq!(dismiss.poll(t + Duration::from_millis(2000)), None);
//! ```

use web_time::{Duration, Instant};

/// Identifier of one scheduling of a [`Deferred`].
///
/// Each call to [`Deferred::schedule`] returns a fresh id, so a caller can
/// tell whether the deadline it armed is still the pending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    id: TimerId,
    /// `None` when the deadline lies beyond the representable range.
    deadline: Option<Instant>,
    payload: T,
}

/// A single cancellable deadline carrying a payload.
#[derive(Debug, Clone)]
pub struct Deferred<T> {
    pending: Option<Pending<T>>,
    next_id: u64,
}

impl<T> Deferred<T> {
    /// Create an idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            next_id: 0,
        }
    }

    /// Arm the timer to deliver `payload` at `now + delay`.
    ///
    /// Any pending deadline is dropped together with its payload. A delay
    /// too large to add to `now` arms a deadline that never comes due.
    pub fn schedule(&mut self, payload: T, now: Instant, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        if self.pending.is_some() {
            tracing::trace!(timer = id.0, "deferred superseded");
        }
        self.pending = Some(Pending {
            id,
            deadline: now.checked_add(delay),
            payload,
        });
        id
    }

    /// Drop the pending deadline. Returns its payload if one was pending.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    /// Deliver the payload if the deadline has passed.
    ///
    /// Yields each payload at most once.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.is_due(now) {
            self.cancel()
        } else {
            None
        }
    }

    /// Whether the pending deadline has passed.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.deadline.is_some_and(|deadline| now >= deadline))
    }

    /// Whether a deadline is pending.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Identifier of the pending scheduling.
    #[must_use]
    pub fn pending_id(&self) -> Option<TimerId> {
        self.pending.as_ref().map(|p| p.id)
    }

    /// When the pending deadline fires. `None` if idle or never due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().and_then(|p| p.deadline)
    }

    /// Time left until the deadline; zero once due, [`Duration::MAX`] if it
    /// never comes due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|p| {
            p.deadline
                .map_or(Duration::MAX, |deadline| deadline.saturating_duration_since(now))
        })
    }

    /// The pending payload, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.payload)
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::new()
    }
}
