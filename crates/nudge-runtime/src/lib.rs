#![forbid(unsafe_code)]

//! nudge runtime
//!
//! Supporting services for the UI layer. Everything here is explicit,
//! injected state with a defined lifecycle rather than module-level
//! singletons.
//!
//! # Key Components
//!
//! - [`Deferred`] - Single cancellable deadline, superseded by each reschedule
//! - [`SessionContext`] - Auth token lifecycle (bootstrap, sign-in, sign-out)
//! - [`TokenStore`] - Persistence seam for the auth token
//! - [`init_tracing`] - Installs the process-wide `tracing` subscriber
//!
//! # How it fits in the system
//! `nudge-widgets` schedules its transient feedback on [`Deferred`] timers.
//! The `nudge` facade creates one [`SessionContext`] at bootstrap and tears
//! it down on sign-out.

pub mod logging;
pub mod session;
pub mod timer;

pub use logging::{LogConfig, LogFormat, LoggingError, init_tracing};
pub use session::{
    AuthToken, JsonFileTokenStore, MemoryTokenStore, SessionContext, SessionError, TokenStore,
};
pub use timer::{Deferred, TimerId};
