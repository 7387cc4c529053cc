#![forbid(unsafe_code)]

//! Widgets for nudge.
//!
//! Stateful UI components built on the `nudge-core` state machines and the
//! `nudge-runtime` timers. None of them render; each exposes a view or a
//! list of actions for the host to draw.
//!
//! # Key Components
//!
//! - [`SwipeableCard`] - Card with one left and one right swipe action
//! - [`SwipeFeedback`] - Auto-dismissing "action done" indicator
//! - [`Haptics`] - Vibration seam used when a card arms
//! - [`ToastStore`] - Injected notification list with dedup and expiry
//! - [`QuickFilters`] - Invoice filter presets and their active state

pub mod haptics;
pub mod quick_filters;
pub mod swipe_feedback;
pub mod swipeable_card;
pub mod toast;
pub mod toast_store;

#[cfg(any(test, feature = "test-helpers"))]
pub use haptics::RecordingHaptics;
pub use haptics::{HapticPattern, Haptics, NoHaptics};
pub use quick_filters::{DueWindow, InvoiceFilter, InvoiceStatus, QuickFilter, QuickFilters};
pub use swipe_feedback::{DEFAULT_FEEDBACK_DURATION, FeedbackIndicator, SwipeFeedback};
pub use swipeable_card::{CardView, SwipeableCard};
pub use toast::{Toast, ToastDuration, ToastId, ToastKind};
pub use toast_store::{ActiveToast, ToastAction, ToastConfig, ToastStats, ToastStore};
