//! Login page: email + password exchanged for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public entry route. A successful login hands the returned
//! token to the session; the redirect effect then sends the visitor on to
//! wherever the route guard remembered, or the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::session::SessionHandle;
use crate::util::browser;
use crate::util::guard::safe_return_path;

pub(crate) const LOGIN_FAILED_MESSAGE: &str = "Erro ao fazer login. Verifique suas credenciais.";

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Option<(String, String)> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return None;
    }
    Some((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let api_client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let failed = RwSignal::new(false);

    // Already signed in (restored session or fresh login): move on.
    Effect::new(move || {
        if session.is_authenticated() {
            let target = session.take_return_to();
            navigate(safe_return_path(target.as_deref()), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some((email_value, password_value)) = validate_login_input(&email.get_untracked(), &password.get_untracked())
        else {
            return;
        };
        busy.set(true);
        failed.set(false);

        let api_client = api_client.clone();
        browser::spawn(async move {
            let outcome = match api::login(&api_client, &email_value, &password_value).await {
                Ok(token) => session.login(&token).map(|_| ()).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            if let Err(e) = outcome {
                log::warn!("login failed: {e}");
                failed.set(true);
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__brand">"COMANDA"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="email">
                        "USUÁRIO"
                    </label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        required
                        placeholder="exemplo@gmail.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">
                        "SENHA"
                    </label>
                    <div class="login-password">
                        <input
                            id="password"
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            required
                            placeholder="••••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="login-password__toggle"
                            aria-label=move || if show_password.get() { "Ocultar senha" } else { "Mostrar senha" }
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "ENTRANDO..." } else { "ENTRAR" }}
                    </button>
                </form>
                <Show when=move || failed.get()>
                    <p class="login-message login-message--error">{LOGIN_FAILED_MESSAGE}</p>
                </Show>
            </div>
        </div>
    }
}
