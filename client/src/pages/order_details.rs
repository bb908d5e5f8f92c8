//! Order detail screen: items, status updates and table release.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::header::Header;
use crate::components::order_item::OrderItemRow;
use crate::components::status_selector::StatusSelector;
use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::{Id, Order, OrderStatus};
use crate::state::remote::Loadable;
use crate::util::browser;
use crate::util::format::{format_brl, format_date_time, pad_table_number};
use crate::util::guard::HOME_PATH;
use crate::util::redirect::use_redirect;

const RELEASE_CONFIRM: &str = "Tem certeza que deseja liberar a mesa? Esta ação não pode ser desfeita.";

#[component]
pub fn OrderDetailsPage() -> impl IntoView {
    let api_client = expect_context::<ApiClient>();
    let params = use_params_map();
    let redirect = use_redirect();

    let order_id = Memo::new(move |_| params.with(|p| p.get("order_id")).map(Id));
    let order = RwSignal::new(Loadable::<Order>::Loading);
    let updating = RwSignal::new(false);
    let releasing = RwSignal::new(false);

    let reload = {
        let api_client = api_client.clone();
        Callback::new(move |()| {
            let Some(id) = order_id.get_untracked() else {
                order.set(Loadable::Failed("pedido não informado".to_owned()));
                return;
            };
            let api_client = api_client.clone();
            browser::spawn(async move {
                let result = api::fetch_order(&api_client, &id).await;
                order.update(|o| o.refresh_with(result));
            });
        })
    };

    Effect::new(move || {
        order_id.track();
        order.set(Loadable::Loading);
        reload.run(());
    });

    let on_status_change = {
        let api_client = api_client.clone();
        Callback::new(move |status: OrderStatus| {
            let Some(id) = order_id.get_untracked() else {
                return;
            };
            updating.set(true);
            let api_client = api_client.clone();
            browser::spawn(async move {
                if let Err(e) = api::update_order_status(&api_client, &id, status).await {
                    log::warn!("order {id} status update failed: {e}");
                    browser::alert("Erro ao atualizar status do pedido.");
                }
                updating.set(false);
                reload.run(());
            });
        })
    };

    let on_release = move |_| {
        let Some(table_id) = order.with_untracked(|o| o.loaded().map(|o| o.mesa.id.clone())) else {
            return;
        };
        if !browser::confirm(RELEASE_CONFIRM) {
            return;
        }
        releasing.set(true);
        let api_client = api_client.clone();
        browser::spawn(async move {
            match api::release_table(&api_client, &table_id).await {
                Ok(()) => redirect.set(Some(HOME_PATH.to_owned())),
                Err(e) => {
                    log::warn!("release of table {table_id} failed: {e}");
                    browser::alert("Erro ao liberar mesa.");
                }
            }
            releasing.set(false);
        });
    };

    let content = move || match order.get() {
        Loadable::Loading => view! { <p class="page__status">"Carregando pedido..."</p> }.into_any(),
        Loadable::Failed(_) => view! {
            <div class="page__status page__status--error">
                <p>"Erro ao carregar pedido"</p>
                <a class="btn" href=HOME_PATH>
                    "Voltar ao Dashboard"
                </a>
            </div>
        }
        .into_any(),
        Loadable::Loaded(current) => {
            let status = current.status;
            view! {
                <section class="order">
                    <div class="order__summary">
                        <div class="order__table">{format!("MESA {}", pad_table_number(current.mesa.numero))}</div>
                        <div class="order__meta">
                            <p>{format!("PEDIDO REALIZADO AS {}", format_date_time(&current.created_at))}</p>
                            <p>"TEMPO ESTIMADO: 30 MINUTOS"</p>
                            <p>{format!("Nº DO PEDIDO: {}", current.id)}</p>
                        </div>
                    </div>
                    <ul class="order__items">
                        {current.itens.into_iter().map(|item| view! { <OrderItemRow item=item /> }).collect_view()}
                    </ul>
                    <div class="order__footer">
                        <label class="order__status">
                            <span>"STATUS DO PEDIDO:"</span>
                            <StatusSelector
                                current=Signal::derive(move || status)
                                disabled=Signal::derive(move || updating.get())
                                on_change=on_status_change
                            />
                        </label>
                        <button class="btn btn--release" disabled=move || releasing.get() on:click=on_release.clone()>
                            {move || if releasing.get() { "LIBERANDO..." } else { "LIBERAR MESA" }}
                        </button>
                        <div class="order__total">{format!("VALOR TOTAL: {}", format_brl(current.valor_total))}</div>
                    </div>
                </section>
            }
            .into_any()
        }
    };

    view! {
        <div class="page">
            <Header show_back=true />
            <main class="page__body">{content}</main>
        </div>
    }
}
