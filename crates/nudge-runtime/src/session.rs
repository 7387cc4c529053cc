#![forbid(unsafe_code)]

//! Session context: the auth token as injected state.
//!
//! The token is owned by a [`SessionContext`] that the application creates
//! once at bootstrap and hands to whatever needs to authenticate requests.
//! Persistence goes through the [`TokenStore`] seam, so the browser's
//! local storage, a JSON file on disk, or plain memory are interchangeable.
//!
//! # Lifecycle
//!
//! 1. [`SessionContext::bootstrap`] restores a previously stored token.
//! 2. [`SessionContext::sign_in`] validates, persists and adopts a token.
//! 3. [`SessionContext::sign_out`] forgets the token in memory and in the
//!    store.
//!
//! # File Format
//!
//! ```json
//! { "version": 1, "token": "eyJhbGciOi..." }
//! ```
//!
//! Writes use a temp-file-then-rename pattern to prevent corruption.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current token file format version.
const FORMAT_VERSION: u64 = 1;

pub type Result<T> = std::result::Result<T, SessionError>;

/// Failures while restoring or persisting a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported token file version: {found}")]
    UnsupportedVersion { found: u64 },

    #[error("auth token is empty")]
    EmptyToken,
}

// ---------------------------------------------------------------------------
// AuthToken
// ---------------------------------------------------------------------------

/// An opaque bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] if nothing is left after trimming.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The raw token, for building request headers.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(<{} bytes>)", self.0.len())
    }
}

// ---------------------------------------------------------------------------
// TokenStore
// ---------------------------------------------------------------------------

/// Persistence seam for the auth token.
pub trait TokenStore {
    /// Read the stored token, if any.
    fn load(&self) -> Result<Option<AuthToken>>;

    /// Persist `token`, replacing any previous one.
    fn save(&mut self, token: &AuthToken) -> Result<()>;

    /// Remove the stored token. Clearing an empty store succeeds.
    fn clear(&mut self) -> Result<()>;
}

/// In-memory store; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    token: Option<AuthToken>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    #[must_use]
    pub fn with_token(token: AuthToken) -> Self {
        Self { token: Some(token) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<AuthToken>> {
        Ok(self.token.clone())
    }

    fn save(&mut self, token: &AuthToken) -> Result<()> {
        self.token = Some(token.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.token = None;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenFile {
    version: u64,
    token: String,
}

/// Token persisted as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileTokenStore {
    path: PathBuf,
}

impl JsonFileTokenStore {
    /// Store the token at `path`. The parent directory must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the token file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for JsonFileTokenStore {
    /// A missing file means "signed out", not an error.
    fn load(&self) -> Result<Option<AuthToken>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let file: TokenFile = serde_json::from_str(&contents)?;
        if file.version != FORMAT_VERSION {
            return Err(SessionError::UnsupportedVersion {
                found: file.version,
            });
        }
        AuthToken::new(file.token).map(Some)
    }

    fn save(&mut self, token: &AuthToken) -> Result<()> {
        let file = TokenFile {
            version: FORMAT_VERSION,
            token: token.expose().to_owned(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, json)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionContext
// ---------------------------------------------------------------------------

/// Owner of the current auth token.
pub struct SessionContext<S: TokenStore> {
    store: S,
    token: Option<AuthToken>,
}

impl<S: TokenStore> fmt::Debug for SessionContext<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl<S: TokenStore> SessionContext<S> {
    /// Create the context, restoring a stored token if there is one.
    ///
    /// A corrupted store is logged and treated as signed out rather than
    /// failing startup.
    pub fn bootstrap(store: S) -> Self {
        let token = match store.load() {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable stored session");
                None
            }
        };
        tracing::debug!(restored = token.is_some(), "session bootstrapped");
        Self { store, token }
    }

    /// Create the context, failing if the store cannot be read.
    ///
    /// # Errors
    ///
    /// Propagates the store's load error.
    pub fn try_bootstrap(store: S) -> Result<Self> {
        let token = store.load()?;
        Ok(Self { store, token })
    }

    /// Adopt and persist `token`.
    ///
    /// # Errors
    ///
    /// Returns the store error; the in-memory session is unchanged on failure.
    pub fn sign_in(&mut self, token: AuthToken) -> Result<()> {
        self.store.save(&token)?;
        self.token = Some(token);
        tracing::info!("signed in");
        Ok(())
    }

    /// Forget the token in memory and in the store.
    ///
    /// The in-memory token is dropped even if the store fails to clear.
    ///
    /// # Errors
    ///
    /// Returns the store error.
    pub fn sign_out(&mut self) -> Result<()> {
        self.token = None;
        tracing::info!("signed out");
        self.store.clear()
    }

    /// The current token.
    #[must_use]
    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Whether a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `Authorization` header value for API requests.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.token
            .as_ref()
            .map(|token| format!("Bearer {}", token.expose()))
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the context, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }
}
