#![forbid(unsafe_code)]

//! nudge public facade crate.
//!
//! Re-exports the types an application needs from the internal crates and
//! adds the pieces that tie them together: [`NudgeConfig`] loaded from TOML
//! or JSON, the [`AppContext`] created at bootstrap, and one [`Error`] type.
//!
//! ```no_run
//! use nudge::prelude::*;
//!
//! fn main() -> nudge::Result<()> {
//!     let config = NudgeConfig::load_toml_file("nudge.toml")?;
//!     let ctx = AppContext::bootstrap(config, JsonFileTokenStore::new("session.json"))?;
//!     ctx.init_logging()?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context;
pub mod error;

pub use config::{
    CardSection, ConfigError, FeedbackSection, NudgeConfig, SwipeSection, ToastSection,
};
pub use context::AppContext;
pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use nudge_core::card_gesture::{
    CardAction, CardRelease, CardResponse, CardSwipe, CardSwipeConfig, FiredAction,
};
pub use nudge_core::event::{
    InputEvent, PointerEvent, PointerEventKind, PointerId, TouchEvent, TouchPhase, TouchPoint,
};
pub use nudge_core::geometry::{Offset, Point};
pub use nudge_core::gesture::{
    EventResponse, SwipeActions, SwipeConfig, SwipeOutcome, SwipeRecognizer,
};
pub use nudge_core::listeners::Subscription;
pub use nudge_core::semantic_event::{DirectionSet, SwipeDirection, SwipeEvent, SwipeResult};

// --- Runtime re-exports ----------------------------------------------------

pub use nudge_runtime::{
    AuthToken, Deferred, JsonFileTokenStore, LogConfig, LogFormat, MemoryTokenStore,
    SessionContext, TokenStore,
};

// --- Widget re-exports -----------------------------------------------------

pub use nudge_widgets::{
    CardView, FeedbackIndicator, HapticPattern, Haptics, InvoiceFilter, NoHaptics, QuickFilter,
    QuickFilters, SwipeableCard, Toast, ToastAction, ToastConfig, ToastId, ToastKind, ToastStore,
};

/// Everything most apps import.
pub mod prelude {
    pub use crate::{
        AppContext, CardAction, InputEvent, JsonFileTokenStore, MemoryTokenStore, NudgeConfig,
        PointerEvent, PointerEventKind, SwipeActions, SwipeDirection, SwipeEvent, SwipeableCard,
        ToastAction, ToastKind,
    };
}
