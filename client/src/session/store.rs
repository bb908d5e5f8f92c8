//! The single authoritative session for the running app.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` is the only writer of [`AuthState`]. Every transition into
//! `Authenticated` or `Anonymous` keeps durable storage and memory in step and
//! then notifies registered [`SessionListener`]s (the request gateway) with the
//! new token.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::sync::Arc;

use super::storage::TokenStorage;
use super::token::{self, TokenError};
use crate::state::auth::{AuthState, User};

/// Observer of session token changes.
pub trait SessionListener: Send + Sync {
    /// Called with the current token after every transition, `None` when anonymous.
    fn token_changed(&self, token: Option<&str>);
}

/// Rejected `login` attempt. Both variants mean "invalid or expired credential".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid credential: {0}")]
    Malformed(#[from] TokenError),
    #[error("expired credential")]
    Expired,
    #[error("session store is no longer available")]
    Disposed,
}

pub struct SessionStore {
    state: AuthState,
    storage: Arc<dyn TokenStorage>,
    listeners: Vec<Arc<dyn SessionListener>>,
    clock: fn() -> f64,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { state: AuthState::Uninitialized, storage, listeners: Vec::new(), clock: token::now_secs }
    }

    /// Replace the wall clock used for expiry checks.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> f64) -> Self {
        self.clock = clock;
        self
    }

    /// Register a listener and immediately replay the current token to it.
    pub fn subscribe(&mut self, listener: Arc<dyn SessionListener>) {
        listener.token_changed(self.state.token());
        self.listeners.push(listener);
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Restore the session from durable storage.
    ///
    /// Runs once; later calls return the current state untouched.
    pub fn initialize(&mut self) -> &AuthState {
        if self.state != AuthState::Uninitialized {
            return &self.state;
        }
        self.state = AuthState::Loading;

        let next = match self.storage.load() {
            None => AuthState::Anonymous,
            Some(stored) if token::is_expired_at(&stored, (self.clock)()) => {
                log::info!("stored session token expired; clearing");
                self.storage.clear();
                AuthState::Anonymous
            }
            Some(stored) => match token::decode(&stored) {
                Ok(user) => AuthState::Authenticated { user, token: stored },
                Err(e) => {
                    log::warn!("stored session token rejected: {e}");
                    self.storage.clear();
                    AuthState::Anonymous
                }
            },
        };
        self.transition(next);
        &self.state
    }

    /// Start an authenticated session from a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] or [`SessionError::Expired`] and
    /// leaves the current session and storage untouched.
    pub fn login(&mut self, new_token: &str) -> Result<User, SessionError> {
        let user = token::decode(new_token)?;
        if token::is_expired_at(new_token, (self.clock)()) {
            log::warn!("login rejected: token already expired");
            return Err(SessionError::Expired);
        }
        self.storage.save(new_token);
        self.transition(AuthState::Authenticated { user: user.clone(), token: new_token.to_owned() });
        log::info!("session started for {}", user.email);
        Ok(user)
    }

    /// End the session. Safe to call when already anonymous.
    pub fn logout(&mut self) {
        self.storage.clear();
        self.transition(AuthState::Anonymous);
    }

    fn transition(&mut self, next: AuthState) {
        self.state = next;
        let token = self.state.token();
        for listener in &self.listeners {
            listener.token_changed(token);
        }
    }
}
