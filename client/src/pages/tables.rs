//! Table management: register new tables and remove free ones.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::nav_bar::{NavBar, NavTab};
use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::{Table, TableStatus};
use crate::state::catalog::{can_delete_table, validate_table_number};
use crate::state::remote::Loadable;
use crate::util::browser;
use crate::util::format::format_date;

#[component]
pub fn TablesPage() -> impl IntoView {
    let api_client = expect_context::<ApiClient>();
    let tables = RwSignal::new(Loadable::<Vec<Table>>::Loading);
    let numero = RwSignal::new(String::new());
    let creating = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let reload = {
        let api_client = api_client.clone();
        Callback::new(move |()| {
            let api_client = api_client.clone();
            browser::spawn(async move {
                let result = api::fetch_tables(&api_client).await.map(|mut list| {
                    list.sort_by_key(|t| t.numero);
                    list
                });
                tables.update(|t| t.refresh_with(result));
            });
        })
    };
    reload.run(());

    let on_submit = {
        let api_client = api_client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if creating.get_untracked() {
                return;
            }
            let existing = tables.with_untracked(|t| t.loaded().cloned().unwrap_or_default());
            let value = match validate_table_number(&numero.get_untracked(), &existing) {
                Ok(value) => value,
                Err(e) => {
                    browser::alert(&e.to_string());
                    return;
                }
            };
            creating.set(true);
            let api_client = api_client.clone();
            browser::spawn(async move {
                match api::create_table(&api_client, value).await {
                    Ok(()) => {
                        numero.set(String::new());
                        reload.run(());
                    }
                    Err(e) => {
                        log::warn!("table {value} create failed: {e}");
                        browser::alert("Erro ao criar mesa.");
                    }
                }
                creating.set(false);
            });
        }
    };

    let on_delete = Callback::new(move |table: Table| {
        if let Err(e) = can_delete_table(&table) {
            browser::alert(&e.to_string());
            return;
        }
        if !browser::confirm(&format!("Tem certeza que deseja excluir a Mesa {}?", table.numero)) {
            return;
        }
        deleting.set(true);
        let api_client = api_client.clone();
        browser::spawn(async move {
            if let Err(e) = api::delete_table(&api_client, &table.id).await {
                log::warn!("table {} delete failed: {e}", table.numero);
                browser::alert("Erro ao excluir mesa.");
            }
            deleting.set(false);
            reload.run(());
        });
    });

    let row = move |table: Table| {
        let blocked = table.status == TableStatus::Bloqueada;
        let created = table.created_at.as_deref().map(format_date).unwrap_or_default();
        let title = if blocked {
            "Não é possível excluir: mesa está bloqueada".to_owned()
        } else {
            format!("Excluir Mesa {}", table.numero)
        };
        view! {
            <li class="entity-list__row">
                <div>
                    <h3>
                        {format!("Mesa {}", table.numero)}
                        <span class=format!("badge badge--{}", table.status.label().to_lowercase())>
                            {table.status.label()}
                        </span>
                    </h3>
                    <p class="entity-list__meta">{format!("Criada em: {created}")}</p>
                </div>
                <button
                    class="btn btn--danger"
                    title=title
                    disabled=move || deleting.get() || blocked
                    on:click=move |_| on_delete.run(table.clone())
                >
                    "Excluir"
                </button>
            </li>
        }
    };

    view! {
        <div class="page">
            <Header show_back=true />
            <main class="page__body">
                <NavBar active=NavTab::Products />
                <div class="split">
                    <section class="split__form">
                        <h1 class="page__title">"ADICIONAR MESA"</h1>
                        <form class="stack-form" on:submit=on_submit>
                            <label class="field">
                                <span class="field__label">"NÚMERO DA MESA"</span>
                                <input
                                    type="number"
                                    min="1"
                                    required
                                    placeholder="Ex: 1, 2, 3..."
                                    prop:value=move || numero.get()
                                    on:input=move |ev| numero.set(event_target_value(&ev))
                                />
                                <small>"Informe o número identificador da mesa"</small>
                            </label>
                            <ul class="notes">
                                <li>"A mesa será criada com status \"LIVRE\" automaticamente"</li>
                                <li>"O número da mesa deve ser único no sistema"</li>
                            </ul>
                            <button class="btn btn--primary" type="submit" disabled=move || creating.get()>
                                {move || if creating.get() { "CRIANDO..." } else { "CRIAR MESA" }}
                            </button>
                        </form>
                    </section>
                    <section class="split__list">
                        <h2 class="page__subtitle">"MESAS CADASTRADAS"</h2>
                        {move || match tables.get() {
                            Loadable::Loading => view! { <p class="page__status">"Carregando mesas..."</p> }.into_any(),
                            Loadable::Failed(e) => view! {
                                <p class="page__status page__status--error">{format!("Erro ao carregar mesas: {e}")}</p>
                            }
                            .into_any(),
                            Loadable::Loaded(list) if list.is_empty() => view! {
                                <div class="empty-state">
                                    <p>"Nenhuma mesa cadastrada"</p>
                                    <small>"Adicione sua primeira mesa usando o formulário ao lado"</small>
                                </div>
                            }
                            .into_any(),
                            Loadable::Loaded(list) => view! {
                                <ul class="entity-list">{list.into_iter().map(row).collect_view()}</ul>
                            }
                            .into_any(),
                        }}
                    </section>
                </div>
            </main>
        </div>
    }
}
