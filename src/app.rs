//! Root application component: the session holder.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the persisted session once on mount, then renders exactly one of the
//! loading indicator, the login page or the dashboard. Children report back
//! through the `on_login`/`on_logout` callbacks.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::net::types::User;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{Screen, SessionState};
use crate::util::session_store::{LocalStorageSessionStore, SharedSessionStore};

/// Root application component.
///
/// `config` defaults to the local backend and `store` to browser
/// `localStorage`; both are provided as context for the pages.
#[component]
pub fn App(
    #[prop(optional)] config: Option<ClientConfig>,
    #[prop(optional)] store: Option<SharedSessionStore>,
) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_default();
    let store: SharedSessionStore = store.unwrap_or_else(|| Arc::new(LocalStorageSessionStore));
    provide_context(config);
    provide_context(store.clone());

    let session = RwSignal::new(SessionState::initializing());
    provide_context(session);

    let restore_store = store.clone();
    Effect::new(move || {
        session.set(SessionState::restore(restore_store.as_ref()));
    });

    let on_login = Callback::new(move |user: User| {
        session.update(|s| s.login(user.token, user.username));
    });
    let on_logout = Callback::new(move |()| {
        session.update(|s| s.logout(store.as_ref()));
        leptos::logging::log!("logged out");
    });

    let screen = Memo::new(move |_| session.with(SessionState::screen));

    view! {
        <Title text="FiMoney"/>
        <div class="app">
            {move || match screen.get() {
                Screen::Loading => {
                    view! {
                        <div class="loading-container">
                            <div class="loading-spinner">"Loading..."</div>
                        </div>
                    }
                        .into_any()
                }
                Screen::Login => view! { <LoginPage on_login=on_login/> }.into_any(),
                Screen::Dashboard(user) => {
                    view! { <DashboardPage user=user on_logout=on_logout/> }.into_any()
                }
            }}
        </div>
    }
}
