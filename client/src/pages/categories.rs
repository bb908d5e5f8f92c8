//! Category management: create form plus the list of existing categories.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::nav_bar::{NavBar, NavTab};
use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::Category;
use crate::state::catalog::validate_category_name;
use crate::state::remote::Loadable;
use crate::util::browser;
use crate::util::format::format_date;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let api_client = expect_context::<ApiClient>();
    let categories = RwSignal::new(Loadable::<Vec<Category>>::Loading);
    let name = RwSignal::new(String::new());
    let creating = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let reload = {
        let api_client = api_client.clone();
        Callback::new(move |()| {
            let api_client = api_client.clone();
            browser::spawn(async move {
                let result = api::fetch_categories(&api_client).await;
                categories.update(|c| c.refresh_with(result));
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
            let nome = match validate_category_name(&name.get_untracked()) {
                Ok(nome) => nome,
                Err(e) => {
                    browser::alert(&e.to_string());
                    return;
                }
            };
            creating.set(true);
            let api_client = api_client.clone();
            browser::spawn(async move {
                match api::create_category(&api_client, &nome).await {
                    Ok(()) => {
                        name.set(String::new());
                        reload.run(());
                    }
                    Err(e) => {
                        log::warn!("category create failed: {e}");
                        browser::alert("Erro ao criar categoria.");
                    }
                }
                creating.set(false);
            });
        }
    };

    let on_delete = Callback::new(move |category: Category| {
        if !browser::confirm(&format!("Tem certeza que deseja excluir a categoria \"{}\"?", category.nome)) {
            return;
        }
        deleting.set(true);
        let api_client = api_client.clone();
        browser::spawn(async move {
            if let Err(e) = api::delete_category(&api_client, &category.id).await {
                log::warn!("category {} delete failed: {e}", category.id);
                browser::alert("Erro ao excluir categoria.");
            }
            deleting.set(false);
            reload.run(());
        });
    });

    view! {
        <div class="page">
            <Header show_back=true />
            <main class="page__body">
                <NavBar active=NavTab::Products />
                <div class="split">
                    <section class="split__form">
                        <h1 class="page__title">"ADICIONAR CATEGORIA"</h1>
                        <form class="stack-form" on:submit=on_submit>
                            <label class="field">
                                <span class="field__label">"NOME DA CATEGORIA"</span>
                                <input
                                    type="text"
                                    required
                                    placeholder="Ex: Hambúrgueres, Bebidas, Sobremesas..."
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                                <small>"Nome que será exibido no cardápio e sistema"</small>
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || creating.get()>
                                {move || if creating.get() { "CRIANDO..." } else { "CRIAR CATEGORIA" }}
                            </button>
                        </form>
                    </section>
                    <section class="split__list">
                        <h2 class="page__subtitle">"CATEGORIAS CADASTRADAS"</h2>
                        {move || match categories.get() {
                            Loadable::Loading => view! { <p class="page__status">"Carregando categorias..."</p> }.into_any(),
                            Loadable::Failed(e) => view! {
                                <p class="page__status page__status--error">{format!("Erro ao carregar categorias: {e}")}</p>
                            }
                            .into_any(),
                            Loadable::Loaded(list) if list.is_empty() => view! {
                                <div class="empty-state">
                                    <p>"Nenhuma categoria cadastrada"</p>
                                    <small>"Adicione sua primeira categoria usando o formulário ao lado"</small>
                                </div>
                            }
                            .into_any(),
                            Loadable::Loaded(list) => view! {
                                <ul class="entity-list">
                                    {list
                                        .into_iter()
                                        .map(|category| {
                                            let created = category.created_at.as_deref().map(format_date).unwrap_or_default();
                                            let title = format!("Excluir categoria {}", category.nome);
                                            let nome = category.nome.clone();
                                            view! {
                                                <li class="entity-list__row">
                                                    <div>
                                                        <h3>{nome}</h3>
                                                        <p class="entity-list__meta">{format!("Criada em: {created}")}</p>
                                                    </div>
                                                    <button
                                                        class="btn btn--danger"
                                                        title=title
                                                        disabled=move || deleting.get()
                                                        on:click=move |_| on_delete.run(category.clone())
                                                    >
                                                        "Excluir"
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any(),
                        }}
                    </section>
                </div>
            </main>
        </div>
    }
}
