//! Login page with a register-mode toggle.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::User;
use crate::state::login::LoginForm;
use crate::util::session_store::SharedSessionStore;

/// Bimodal login/register form.
///
/// Login success has already persisted the session by the time `on_login`
/// runs. Register success stays on this page in login mode.
#[component]
pub fn LoginPage(on_login: Callback<User>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let store = expect_context::<SharedSessionStore>();
    let form = RwSignal::new(LoginForm::default());

    let mode = move || form.with(|f| f.mode);
    let busy = move || form.with(|f| f.status.is_loading());
    let api_base = config.api_base.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        form.update(|f| request = f.begin_submit());
        let Some(request) = request else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let store = store.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpCatalogApi::new(config.clone());
                let outcome = crate::state::login::submit(&api, store.as_ref(), &config, request).await;
                let mut user = None;
                form.update(|f| user = f.finish_submit(outcome));
                if let Some(user) = user {
                    on_login.run(user);
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, &store, request, on_login);
        }
    };

    view! {
        <div class="login-container">
            <div class="login-form">
                <h2>{move || mode().title()}</h2>

                <Show when=move || form.with(|f| f.status.success().is_some())>
                    <div class="success-message">
                        {move || form.with(|f| f.status.success().unwrap_or_default().to_owned())}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username:"</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            required=true
                            minlength="3"
                            placeholder="Enter your username"
                            prop:value=move || form.with(|f| f.credentials.username.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.set_username(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password:"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            required=true
                            minlength="3"
                            placeholder="Enter your password"
                            prop:value=move || form.with(|f| f.credentials.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.set_password(value));
                            }
                        />
                    </div>

                    <Show when=move || form.with(|f| f.status.error().is_some())>
                        <div class="error-message">
                            {move || form.with(|f| f.status.error().unwrap_or_default().to_owned())}
                        </div>
                    </Show>

                    <button type="submit" class="login-button" disabled=busy>
                        {move || mode().submit_label(busy())}
                    </button>
                </form>

                <div class="login-footer">
                    <p>
                        {move || mode().toggle_prompt()}
                        " "
                        <button
                            type="button"
                            class="toggle-mode-button"
                            disabled=busy
                            on:click=move |_| form.update(LoginForm::toggle_mode)
                        >
                            {move || mode().toggle_label()}
                        </button>
                    </p>
                </div>

                <div class="api-info">
                    <small>{move || format!("Backend API: {api_base}{}", mode().path())}</small>
                </div>
            </div>
        </div>
    }
}
