#![forbid(unsafe_code)]

//! Toast store: the application's notification list as injected state.
//!
//! The store provides:
//! - FIFO ordering with a cap on simultaneously visible toasts
//! - Content-based deduplication within a configurable time window
//! - Rejection of new toasts once the waiting queue is full
//! - Expiry processing via [`ToastStore::tick`]
//!
//! Time is always passed in, so the store never reads a clock.
//!
//! # Example
//!
//! ```
//! use nudge_widgets::toast_store::{ToastAction, ToastStore};
//! use web_time::{Duration, Instant};
//!
//! let mut toasts = ToastStore::default();
//! let t = Instant::now();
//! let id = toasts.success("Invoice sent", t).unwrap();
//!
//! assert_eq!(toasts.tick(t), vec![ToastAction::Show(id)]);
//! assert_eq!(toasts.tick(t + Duration::from_secs(5)), vec![ToastAction::Hide(id)]);
//! ```

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};

use web_time::{Duration, Instant};

use crate::toast::{Toast, ToastDuration, ToastId, ToastKind};

/// Configuration for the toast store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastConfig {
    /// Maximum number of toasts visible at once.
    pub max_visible: usize,
    /// Maximum number of toasts waiting to be shown.
    pub max_queued: usize,
    /// Auto-dismiss delay for toasts without their own duration.
    pub default_duration: Duration,
    /// Identical toasts pushed within this window are dropped.
    pub dedup_window: Duration,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_visible: 3,
            max_queued: 10,
            default_duration: Duration::from_secs(5),
            dedup_window: Duration::from_secs(1),
        }
    }
}

impl ToastConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_visible(mut self, max: usize) -> Self {
        self.max_visible = max;
        self
    }

    #[must_use]
    pub fn max_queued(mut self, max: usize) -> Self {
        self.max_queued = max;
        self
    }

    #[must_use]
    pub fn default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    #[must_use]
    pub fn dedup_window(mut self, window: Duration) -> Self {
        self.dedup_window = window;
        self
    }
}

/// Changes produced by [`ToastStore::tick`] for the renderer to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastAction {
    Show(ToastId),
    Hide(ToastId),
}

/// Counters for monitoring and debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastStats {
    /// Total toasts pushed, accepted or not.
    pub total_pushed: u64,
    /// Rejected because the queue was full.
    pub overflow_count: u64,
    /// Rejected as duplicates.
    pub dedup_count: u64,
    /// Removed by [`ToastStore::dismiss`] or [`ToastStore::dismiss_all`].
    pub user_dismissed: u64,
    /// Hidden because their duration ran out.
    pub auto_expired: u64,
}

/// A toast currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: ToastId,
    pub toast: Toast,
    pub shown_at: Instant,
    /// `None` for persistent toasts.
    pub expires_at: Option<Instant>,
}

impl ActiveToast {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

#[derive(Debug)]
struct QueuedToast {
    id: ToastId,
    toast: Toast,
}

fn content_hash(toast: &Toast) -> u64 {
    let mut hasher = DefaultHasher::new();
    toast.kind.hash(&mut hasher);
    toast.message.hash(&mut hasher);
    if let Some(ref title) = toast.title {
        title.hash(&mut hasher);
    }
    hasher.finish()
}

/// Toast store.
#[derive(Debug)]
pub struct ToastStore {
    /// Accepted toasts waiting for a visible slot.
    queue: VecDeque<QueuedToast>,
    visible: Vec<ActiveToast>,
    /// Dismissed visible toasts, reported as `Hide` on the next tick.
    pending_hides: Vec<ToastId>,
    config: ToastConfig,
    recent_hashes: HashMap<u64, Instant>,
    next_id: u64,
    stats: ToastStats,
}

impl ToastStore {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            queue: VecDeque::new(),
            visible: Vec::new(),
            pending_hides: Vec::new(),
            config,
            recent_hashes: HashMap::new(),
            next_id: 0,
            stats: ToastStats::default(),
        }
    }

    /// Queue a toast.
    ///
    /// Returns its id, or `None` if it was a duplicate or the queue is full.
    pub fn push(&mut self, toast: Toast, now: Instant) -> Option<ToastId> {
        self.stats.total_pushed += 1;

        if !self.dedup_check(content_hash(&toast), now) {
            self.stats.dedup_count += 1;
            tracing::trace!(kind = toast.kind.as_str(), "duplicate toast dropped");
            return None;
        }

        if self.queue.len() >= self.config.max_queued {
            self.stats.overflow_count += 1;
            tracing::warn!(
                kind = toast.kind.as_str(),
                max_queued = self.config.max_queued,
                "toast queue full"
            );
            return None;
        }

        let id = ToastId::new(self.next_id);
        self.next_id += 1;
        self.queue.push_back(QueuedToast { id, toast });
        Some(id)
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> Option<ToastId> {
        self.push(Toast::new(ToastKind::Success, message), now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> Option<ToastId> {
        self.push(Toast::new(ToastKind::Error, message), now)
    }

    pub fn warning(&mut self, message: impl Into<String>, now: Instant) -> Option<ToastId> {
        self.push(Toast::new(ToastKind::Warning, message), now)
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) -> Option<ToastId> {
        self.push(Toast::new(ToastKind::Info, message), now)
    }

    /// Remove a toast, visible or queued. Returns whether it was found.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(idx) = self.visible.iter().position(|t| t.id == id) {
            self.visible.remove(idx);
            self.pending_hides.push(id);
            self.stats.user_dismissed += 1;
            return true;
        }
        if let Some(idx) = self.queue.iter().position(|q| q.id == id) {
            self.queue.remove(idx);
            self.stats.user_dismissed += 1;
            return true;
        }
        false
    }

    /// Remove every toast. Visible ones are reported hidden on the next tick.
    pub fn dismiss_all(&mut self) {
        let dismissed = self.visible.len() + self.queue.len();
        self.stats.user_dismissed += dismissed as u64;
        self.pending_hides
            .extend(self.visible.drain(..).map(|t| t.id));
        self.queue.clear();
    }

    /// Drop all state except statistics, without reporting hides.
    ///
    /// Used on sign-out, when the surface showing the toasts goes away too.
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
        self.pending_hides.clear();
        self.recent_hashes.clear();
    }

    /// Expire visible toasts and promote queued ones.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastAction> {
        let window = self.config.dedup_window;
        self.recent_hashes
            .retain(|_, t| now.saturating_duration_since(*t) < window);

        let mut actions: Vec<ToastAction> =
            self.pending_hides.drain(..).map(ToastAction::Hide).collect();

        let mut i = 0;
        while i < self.visible.len() {
            if self.visible[i].is_expired(now) {
                let id = self.visible.remove(i).id;
                self.stats.auto_expired += 1;
                actions.push(ToastAction::Hide(id));
            } else {
                i += 1;
            }
        }

        while self.visible.len() < self.config.max_visible {
            let Some(queued) = self.queue.pop_front() else {
                break;
            };
            // A lifetime past the end of representable time never expires.
            let expires_at = match queued.toast.duration {
                ToastDuration::Default => now.checked_add(self.config.default_duration),
                ToastDuration::After(duration) => now.checked_add(duration),
                ToastDuration::Persistent => None,
            };
            actions.push(ToastAction::Show(queued.id));
            self.visible.push(ActiveToast {
                id: queued.id,
                toast: queued.toast,
                shown_at: now,
                expires_at,
            });
        }

        actions
    }

    /// Toasts on screen, oldest first.
    #[must_use]
    pub fn visible(&self) -> &[ActiveToast] {
        &self.visible
    }

    /// Look up a visible toast.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ActiveToast> {
        self.visible.iter().find(|t| t.id == id)
    }

    /// Number of toasts waiting for a visible slot.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// No visible or queued toasts.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> &ToastStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    fn dedup_check(&mut self, hash: u64, now: Instant) -> bool {
        let window = self.config.dedup_window;
        self.recent_hashes
            .retain(|_, t| now.saturating_duration_since(*t) < window);

        if self.recent_hashes.contains_key(&hash) {
            return false;
        }
        self.recent_hashes.insert(hash, now);
        true
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}
