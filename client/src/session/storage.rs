//! Durable token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the raw session token in `localStorage` so a reload does
//! not log the user out. Storage access is isolated behind [`TokenStorage`] so
//! the session store stays testable off-browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Key/value slot holding at most one raw token.
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `window.localStorage` under a fixed key.
///
/// Outside the browser every operation is a no-op and `load` returns `None`,
/// which keeps server rendering deterministic.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorage {
    key: &'static str,
}

impl LocalStorage {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = browser_storage() else {
                log::warn!("localStorage unavailable; session will not survive reload");
                return;
            };
            if storage.set_item(self.key, token).is_err() {
                log::warn!("failed to persist session token");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.key, token);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = browser_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}

/// In-process storage, used for tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Storage pre-seeded with `token`, as if left behind by a previous run.
    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
