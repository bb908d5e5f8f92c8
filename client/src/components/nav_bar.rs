//! Section switcher under the header.

use leptos::prelude::*;

use crate::session::SessionHandle;
use crate::state::auth::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTab {
    Orders,
    Products,
    History,
}

#[component]
pub fn NavBar(active: NavTab) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let is_admin = move || session.role() == Some(Role::Admin);

    let entry = move |tab: NavTab, title: &'static str, href: &'static str| {
        view! {
            <a class="nav-btn" class:nav-btn--primary={active == tab} class:nav-btn--secondary={active != tab} href=href>
                {title}
            </a>
        }
    };

    view! {
        <nav class="nav-bar">
            {entry(NavTab::Orders, "PEDIDOS", "/dashboard")}
            <Show when=is_admin>{entry(NavTab::Products, "PRODUTOS", "/products")}</Show>
            {entry(NavTab::History, "HISTÓRICO", "/history")}
        </nav>
    }
}
