//! Session credential handling
//!
//! The HTTP client never owns the session token directly. It asks a
//! [`CredentialProvider`] for the current bearer token on every request and
//! tells it to forget the token when the backend answers 403.

use parking_lot::RwLock;
use tracing::debug;

/// Source of the bearer token attached to outgoing requests
pub trait CredentialProvider: Send + Sync {
    /// Current token, `None` when no session exists
    fn token(&self) -> Option<String>;

    /// Remember a freshly issued token
    fn store(&self, token: String);

    /// Forget the token (logout or rejected session)
    fn clear(&self);

    fn has_session(&self) -> bool {
        self.token().is_some()
    }
}

/// In-memory session store, one per process
#[derive(Debug, Default)]
pub struct SessionStore {
    token: RwLock<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialProvider for SessionStore {
    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn store(&self, token: String) {
        *self.token.write() = Some(token);
        debug!("Session token stored");
    }

    fn clear(&self) {
        if self.token.write().take().is_some() {
            debug!("Session token cleared");
        }
    }
}
