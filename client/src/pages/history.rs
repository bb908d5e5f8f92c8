//! Order history with totals.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::history_row::HistoryRow;
use crate::components::nav_bar::{NavBar, NavTab};
use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::HistoryEntry;
use crate::state::history::HistorySummary;
use crate::state::remote::Loadable;
use crate::util::browser;
use crate::util::format::format_brl;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let api_client = expect_context::<ApiClient>();
    let entries = RwSignal::new(Loadable::<Vec<HistoryEntry>>::Loading);

    browser::spawn(async move {
        let result = api::fetch_history(&api_client).await;
        entries.set(Loadable::from_result(result));
    });

    view! {
        <div class="page">
            <Header />
            <main class="page__body">
                <NavBar active=NavTab::History />
                {move || match entries.get() {
                    Loadable::Loading => view! { <p class="page__status">"Carregando histórico..."</p> }.into_any(),
                    Loadable::Failed(e) => view! {
                        <p class="page__status page__status--error">{format!("Erro ao carregar histórico: {e}")}</p>
                    }
                    .into_any(),
                    Loadable::Loaded(list) if list.is_empty() => view! {
                        <div class="empty-state">
                            <p>"Nenhum pedido no histórico"</p>
                        </div>
                    }
                    .into_any(),
                    Loadable::Loaded(list) => {
                        let summary = HistorySummary::from_entries(&list);
                        view! {
                            <table class="history-table">
                                <thead>
                                    <tr>
                                        <th>"Nº PEDIDO"</th>
                                        <th>"MESA"</th>
                                        <th>"DATA"</th>
                                        <th>"HORA"</th>
                                        <th>"VALOR TOTAL"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, entry)| view! { <HistoryRow entry=entry index=index /> })
                                        .collect_view()}
                                </tbody>
                            </table>
                            <div class="history-summary">
                                <div class="history-summary__cell">
                                    <span>"TOTAL DE PEDIDOS"</span>
                                    <strong>{summary.count}</strong>
                                </div>
                                <div class="history-summary__cell">
                                    <span>"VALOR TOTAL"</span>
                                    <strong>{format_brl(summary.total)}</strong>
                                </div>
                                <div class="history-summary__cell">
                                    <span>"TICKET MÉDIO"</span>
                                    <strong>{format_brl(summary.average)}</strong>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </main>
        </div>
    }
}
