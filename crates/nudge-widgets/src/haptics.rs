#![forbid(unsafe_code)]

//! Haptic feedback seam.
//!
//! Widgets never talk to a vibration API directly. They hold an
//! `Rc<dyn Haptics>` supplied by the host, which maps each [`HapticPattern`]
//! onto whatever the platform offers (or nothing at all).

use web_time::Duration;

/// A vibration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HapticPattern {
    /// Short tick, used when a card arms an action.
    #[default]
    Tick,
    /// A pulse of explicit length.
    Pulse(Duration),
}

impl HapticPattern {
    /// Length of the tick pattern.
    pub const TICK_DURATION: Duration = Duration::from_millis(10);

    /// How long the device should vibrate.
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::Tick => Self::TICK_DURATION,
            Self::Pulse(duration) => duration,
        }
    }
}

/// Platform haptics.
///
/// Implementations must not block; a request the device cannot honor is
/// dropped silently.
pub trait Haptics {
    fn pulse(&self, pattern: HapticPattern);
}

/// Haptics for platforms without a vibration motor.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&self, _pattern: HapticPattern) {}
}

#[cfg(any(test, feature = "test-helpers"))]
pub use recording::RecordingHaptics;

#[cfg(any(test, feature = "test-helpers"))]
mod recording {
    use std::cell::RefCell;

    use super::{HapticPattern, Haptics};

    /// Records every requested pattern, in order.
    #[derive(Debug, Default)]
    pub struct RecordingHaptics {
        pulses: RefCell<Vec<HapticPattern>>,
    }

    impl RecordingHaptics {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Patterns requested so far.
        #[must_use]
        pub fn pulses(&self) -> Vec<HapticPattern> {
            self.pulses.borrow().clone()
        }

        /// Number of pulses requested so far.
        #[must_use]
        pub fn count(&self) -> usize {
            self.pulses.borrow().len()
        }
    }

    impl Haptics for RecordingHaptics {
        fn pulse(&self, pattern: HapticPattern) {
            self.pulses.borrow_mut().push(pattern);
        }
    }
}
