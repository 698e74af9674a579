//! Persistent session storage behind a small repository trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session holder and the login page read and write the signed-in user
//! through [`SessionStore`] rather than touching `localStorage` directly. The
//! browser build injects [`LocalStorageSessionStore`]; tests use
//! [`MemorySessionStore`].
//!
//! Layout: key `token` holds the bearer token, key `username` the plain
//! username. Both are written together and removed together.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::User;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";

/// Load/save/clear access to the persisted session.
pub trait SessionStore: Send + Sync {
    /// The persisted user, if both keys hold non-empty values.
    fn load(&self) -> Option<User>;

    /// Persist `user`, overwriting any previous session.
    fn save(&self, user: &User);

    /// Remove both session keys. A no-op when nothing is stored.
    fn clear(&self);
}

/// Handle type placed into Leptos context.
pub type SharedSessionStore = Arc<dyn SessionStore>;

/// Build a user only when both stored values are present and non-empty.
pub fn user_from_entries(token: Option<String>, username: Option<String>) -> Option<User> {
    let token = token.filter(|t| !t.is_empty())?;
    let username = username.filter(|u| !u.is_empty())?;
    Some(User { username, token })
}

/// Browser `localStorage` store. Native builds see an always-empty store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSessionStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Option<User> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            let token = storage.get_item(TOKEN_KEY).ok().flatten();
            let username = storage.get_item(USERNAME_KEY).ok().flatten();
            user_from_entries(token, username)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, user: &User) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; session not persisted");
                return;
            };
            let _ = storage.set_item(TOKEN_KEY, &user.token);
            let _ = storage.set_item(USERNAME_KEY, &user.username);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USERNAME_KEY);
            }
        }
    }
}

/// In-process store with the same two-key layout as `localStorage`.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw key/value pairs.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { entries: Mutex::new(entries) }
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<User> {
        user_from_entries(self.get(TOKEN_KEY), self.get(USERNAME_KEY))
    }

    fn save(&self, user: &User) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(TOKEN_KEY.to_owned(), user.token.clone());
        entries.insert(USERNAME_KEY.to_owned(), user.username.clone());
    }

    fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(TOKEN_KEY);
        entries.remove(USERNAME_KEY);
    }
}
