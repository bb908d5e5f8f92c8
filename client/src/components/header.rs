//! Top bar shown on every authenticated screen.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::session::SessionHandle;
use crate::util::browser;
use crate::util::guard::ENTRY_PATH;

#[component]
pub fn Header(#[prop(optional)] show_back: bool) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();

    let email = move || session.user().map(|u| u.email).unwrap_or_default();
    let role_label = move || session.role().map(|r| r.label()).unwrap_or_default();

    let on_logout = move |_| {
        session.logout();
        navigate(ENTRY_PATH, NavigateOptions::default());
    };

    view! {
        <header class="app-header">
            <div class="app-header__left">
                <Show when=move || show_back>
                    <button
                        class="app-header__back"
                        title="Voltar"
                        aria-label="Voltar"
                        on:click=move |_| browser::history_back()
                    >
                        "←"
                    </button>
                </Show>
            </div>
            <div class="app-header__brand">"COMANDA"</div>
            <div class="app-header__user">
                <div class="app-header__identity">
                    <p class="app-header__role">{role_label}</p>
                    <p class="app-header__email">{email}</p>
                </div>
                <button class="btn btn--logout" on:click=on_logout>
                    "Sair"
                </button>
            </div>
        </header>
    }
}
