//! Dashboard: live grid of tables and their latest orders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route after login. Loads `/pedidos/mesas/ultimo` on mount and
//! polls it while the page is mounted; a failed refresh keeps the last grid.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::nav_bar::{NavBar, NavTab};
use crate::components::table_card::TableCard;
use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::TableOverview;
use crate::state::remote::Loadable;
use crate::util::browser;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api_client = expect_context::<ApiClient>();
    let tables = RwSignal::new(Loadable::<Vec<TableOverview>>::Loading);

    let load = {
        let api_client = api_client.clone();
        move || {
            let api_client = api_client.clone();
            browser::spawn(async move {
                let result = api::fetch_table_overview(&api_client).await;
                tables.update(|t| t.refresh_with(result));
            });
        }
    };
    load();

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let api_poll = api_client.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(crate::config::DASHBOARD_REFRESH_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let result = api::fetch_table_overview(&api_poll).await;
                tables.update(|t| t.refresh_with(result));
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="page">
            <Header />
            <main class="page__body">
                <NavBar active=NavTab::Orders />
                {move || match tables.get() {
                    Loadable::Loading => view! { <p class="page__status">"Carregando mesas..."</p> }.into_any(),
                    Loadable::Failed(e) => view! {
                        <p class="page__status page__status--error">{format!("Erro ao carregar mesas: {e}")}</p>
                    }
                    .into_any(),
                    Loadable::Loaded(rows) if rows.is_empty() => view! {
                        <p class="page__status">"Nenhuma mesa com pedidos no momento."</p>
                    }
                    .into_any(),
                    Loadable::Loaded(rows) => view! {
                        <div class="table-grid">
                            {rows.into_iter().map(|entry| view! { <TableCard entry=entry /> }).collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
