#![forbid(unsafe_code)]

//! Application context.
//!
//! [`AppContext`] is created once at bootstrap and passed to whatever needs
//! the session, the toast list, or pre-configured gesture components. It
//! replaces ambient module-level state: two contexts never share anything.

use std::fmt;
use std::rc::Rc;

use nudge_core::card_gesture::CardSwipe;
use nudge_core::gesture::{SwipeActions, SwipeRecognizer};
use nudge_runtime::logging::init_tracing;
use nudge_runtime::session::{AuthToken, SessionContext, TokenStore};
use nudge_widgets::haptics::{Haptics, NoHaptics};
use nudge_widgets::quick_filters::QuickFilters;
use nudge_widgets::swipeable_card::SwipeableCard;
use nudge_widgets::toast_store::ToastStore;

use crate::config::{ConfigError, NudgeConfig};
use crate::error::Result;

/// Session, toasts and component factories for one running app.
pub struct AppContext<S: TokenStore> {
    config: NudgeConfig,
    session: SessionContext<S>,
    toasts: ToastStore,
    haptics: Rc<dyn Haptics>,
}

impl<S: TokenStore> fmt::Debug for AppContext<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("session", &self.session)
            .field("toasts", &self.toasts.visible_count())
            .field("pending_toasts", &self.toasts.pending_count())
            .finish()
    }
}

impl<S: TokenStore> AppContext<S> {
    /// Validate `config` and restore the session from `store`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` does not validate. An
    /// unreadable store is not an error; the app starts signed out.
    pub fn bootstrap(config: NudgeConfig, store: S) -> Result<Self> {
        let problems = config.validate();
        if !problems.is_empty() {
            return Err(ConfigError::Validation(problems).into());
        }
        let session = SessionContext::bootstrap(store);
        let toasts = ToastStore::new(config.to_toast_config());
        tracing::info!(
            authenticated = session.is_authenticated(),
            "app context bootstrapped"
        );
        Ok(Self {
            config,
            session,
            toasts,
            haptics: Rc::new(NoHaptics),
        })
    }

    /// Use `haptics` for cards created from now on.
    #[must_use]
    pub fn with_haptics(mut self, haptics: Rc<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    /// Install the global `tracing` subscriber from the logging section.
    ///
    /// # Errors
    ///
    /// See [`init_tracing`].
    pub fn init_logging(&self) -> Result<()> {
        init_tracing(&self.config.logging)?;
        Ok(())
    }

    /// Validate and adopt a raw token.
    ///
    /// # Errors
    ///
    /// Fails on an empty token or if the store cannot persist it.
    pub fn sign_in(&mut self, raw_token: &str) -> Result<()> {
        let token = AuthToken::new(raw_token)?;
        self.session.sign_in(token)?;
        Ok(())
    }

    /// Tear down the session: all toasts go away and the token is forgotten.
    ///
    /// # Errors
    ///
    /// Returns the store error if the persisted token could not be removed.
    /// The in-memory state is cleared regardless.
    pub fn sign_out(&mut self) -> Result<()> {
        self.toasts.clear();
        self.session.sign_out()?;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &NudgeConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext<S> {
        &self.session
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastStore {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastStore {
        &mut self.toasts
    }

    /// A recognizer using the configured swipe thresholds.
    #[must_use]
    pub fn swipe_recognizer(&self, actions: SwipeActions) -> SwipeRecognizer {
        SwipeRecognizer::with_actions(self.config.to_swipe_config(), actions)
    }

    /// A card state machine using the configured thresholds, no actions yet.
    #[must_use]
    pub fn card_swipe(&self) -> CardSwipe {
        CardSwipe::new(self.config.to_card_config())
    }

    /// Wrap `card` with the configured haptics and feedback duration.
    ///
    /// The returned widget is not mounted.
    #[must_use]
    pub fn swipeable_card(&self, card: CardSwipe) -> SwipeableCard {
        SwipeableCard::new(card, Rc::clone(&self.haptics))
            .with_feedback_duration(self.config.feedback_duration())
            .with_haptics_enabled(self.config.card.haptics)
    }

    /// The invoice list's quick filter chips.
    #[must_use]
    pub fn quick_filters(&self) -> QuickFilters {
        QuickFilters::defaults()
    }

    /// Consume the context, returning the token store.
    pub fn into_store(self) -> S {
        self.session.into_store()
    }
}
