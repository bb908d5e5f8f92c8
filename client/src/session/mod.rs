//! Session handling: token codec, durable storage and the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionHandle`] is the single session instance of the running app. `App`
//! creates it, wires the request gateway in as a listener, and provides it via
//! Leptos context; route guards and pages read it, only login/logout write it.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod storage;
pub mod store;
pub mod token;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::TOKEN_STORAGE_KEY;
use crate::net::gateway::ApiClient;
use crate::state::auth::{AuthState, Role, User};
use storage::LocalStorage;
use store::{SessionError, SessionStore};

/// Copyable reactive handle over the app's [`SessionStore`].
#[derive(Clone, Copy, Debug)]
pub struct SessionHandle {
    store: RwSignal<SessionStore>,
    return_to: RwSignal<Option<String>>,
}

impl SessionHandle {
    pub fn new(store: SessionStore) -> Self {
        Self { store: RwSignal::new(store), return_to: RwSignal::new(None) }
    }

    /// Browser session persisted in `localStorage` and mirrored into `api`.
    pub fn for_browser(api: &ApiClient) -> Self {
        let mut store = SessionStore::new(Arc::new(LocalStorage::new(TOKEN_STORAGE_KEY)));
        store.subscribe(Arc::new(api.clone()));
        Self::new(store)
    }

    /// Snapshot of the current state (tracked).
    pub fn state(&self) -> AuthState {
        self.store.with(|s| s.state().clone())
    }

    pub fn is_loading(&self) -> bool {
        self.store.with(|s| s.state().is_loading())
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(|s| s.state().is_authenticated())
    }

    pub fn user(&self) -> Option<User> {
        self.store.with(|s| s.state().user().cloned())
    }

    pub fn role(&self) -> Option<Role> {
        self.store.with(|s| s.state().role())
    }

    /// One-time restore from durable storage; call after hydration.
    pub fn initialize(&self) {
        self.store.update(|s| {
            s.initialize();
        });
    }

    /// # Errors
    ///
    /// Returns a [`SessionError`] when the token is malformed or expired; the
    /// session is left as it was.
    pub fn login(&self, token: &str) -> Result<User, SessionError> {
        self.store.try_update(|s| s.login(token)).unwrap_or(Err(SessionError::Disposed))
    }

    pub fn logout(&self) {
        self.store.update(SessionStore::logout);
        self.return_to.set(None);
    }

    /// Remember where an anonymous visitor was headed before the redirect.
    pub fn remember_return_to(&self, path: String) {
        self.return_to.set(Some(path));
    }

    /// Consume the remembered location, if any.
    pub fn take_return_to(&self) -> Option<String> {
        self.return_to.try_update(Option::take).flatten()
    }
}
