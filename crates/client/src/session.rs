//! Explicit session state for the client.
//!
//! Replaces implicit global credential storage with one canonical bearer
//! token behind a shared handle. Cloning a [`Session`] shares the same
//! underlying state, so a 401-triggered [`clear`](Session::clear) in the
//! HTTP layer logs out every holder at once.

use std::sync::{Arc, RwLock};

/// Shared bearer-token holder.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Create an unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session pre-loaded with a bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    /// Store the bearer token, replacing any previous one.
    pub fn set_token(&self, token: impl Into<String>) {
        let mut guard = self.token.write().expect("session lock poisoned");
        *guard = Some(token.into());
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    /// Drop the stored credentials (logout side effect of a 401).
    pub fn clear(&self) {
        let mut guard = self.token.write().expect("session lock poisoned");
        *guard = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("session lock poisoned").is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself.
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
