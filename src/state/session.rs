//! Auth-session state owned by the root component.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session holder renders exactly one of a loading indicator, the login
//! page or the dashboard. Which one follows from [`SessionState::screen`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::session_store::SessionStore;

/// Current user plus whether the persisted session is still being read.
///
/// Authentication is derived from `user`, so a session can never be
/// authenticated without a user record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

/// The single view the session holder renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Login,
    Dashboard(User),
}

impl SessionState {
    /// State before the persisted session has been read.
    pub fn initializing() -> Self {
        Self { user: None, loading: true }
    }

    /// Finish initialization from whatever `store` holds.
    pub fn restore(store: &dyn SessionStore) -> Self {
        let user = store.load();
        if let Some(user) = &user {
            leptos::logging::log!("restored session for {}", user.username);
        }
        Self { user, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Mark the session authenticated. The token is trusted as given.
    pub fn login(&mut self, token: String, username: String) {
        self.user = Some(User { username, token });
        self.loading = false;
    }

    /// Drop both persisted keys and return to the unauthenticated state.
    pub fn logout(&mut self, store: &dyn SessionStore) {
        store.clear();
        self.user = None;
        self.loading = false;
    }

    pub fn screen(&self) -> Screen {
        if self.loading {
            return Screen::Loading;
        }
        match &self.user {
            Some(user) => Screen::Dashboard(user.clone()),
            None => Screen::Login,
        }
    }
}
