#![forbid(unsafe_code)]

//! Toast notification value types.

use std::fmt;

use web_time::Duration;

/// Identifier assigned by the [`ToastStore`](crate::toast_store::ToastStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Short, stable name for logs and styling hooks.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// How long a toast stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastDuration {
    /// Use the store's configured default.
    #[default]
    Default,
    After(Duration),
    /// Stays until dismissed.
    Persistent,
}

/// A toast notification.
///
/// Built with [`Toast::new`] and the builder methods; the store assigns the
/// id on push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
    pub duration: ToastDuration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
            duration: ToastDuration::Default,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Hide after `duration` instead of the store default.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = ToastDuration::After(duration);
        self
    }

    /// Keep visible until dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = ToastDuration::Persistent;
        self
    }
}
