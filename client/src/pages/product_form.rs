//! Create/edit form for a catalog product.
//!
//! DESIGN
//! ======
//! The same component serves `/products/add` and `/products/edit/:id`; the
//! presence of the route id switches prefill and the save method. Field rules
//! live in `state::catalog` so they can be tested without a browser.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::header::Header;
use crate::components::nav_bar::{NavBar, NavTab};
use crate::config::resolve_image_url;
use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::{Category, Id};
use crate::state::catalog::{ProductDraft, format_price_input, sanitize_price_input};
use crate::util::browser;
use crate::util::redirect::use_redirect;

const PRODUCTS_PATH: &str = "/products";

#[component]
pub fn ProductFormPage() -> impl IntoView {
    let api_client = expect_context::<ApiClient>();
    let params = use_params_map();
    let redirect = use_redirect();

    let product_id = Memo::new(move |_| params.with(|p| p.get("id")).map(Id));
    let editing = move || product_id.get().is_some();

    let draft = RwSignal::new(ProductDraft::default());
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let current_image = RwSignal::new(None::<String>);
    let image_name = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let image_file = RwSignal::new_local(None::<web_sys::File>);

    {
        let api_client = api_client.clone();
        Effect::new(move || {
            let id = product_id.get();
            let api_client = api_client.clone();
            loading.set(true);
            browser::spawn(async move {
                match api::fetch_categories(&api_client).await {
                    Ok(list) => categories.set(list),
                    Err(e) => log::warn!("category list failed: {e}"),
                }
                if let Some(id) = id {
                    match api::fetch_product(&api_client, &id).await {
                        Ok(product) => {
                            let image = product.imagem.as_deref().map(|p| resolve_image_url(api_client.base_url(), p));
                            draft.set(ProductDraft {
                                nome: product.nome,
                                preco: format_price_input(product.preco),
                                descricao: product.descricao,
                                categoria_id: Some(product.categoria.id),
                            });
                            current_image.set(image);
                        }
                        Err(e) => error.set(Some(format!("Erro ao carregar produto: {e}"))),
                    }
                }
                loading.set(false);
            });
        });
    }

    #[cfg(feature = "hydrate")]
    let on_image = move |ev: leptos::ev::Event| {
        use wasm_bindgen::JsCast as _;

        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Err(e) = crate::state::catalog::validate_image(&file.type_(), file.size()) {
            input.set_value("");
            browser::alert(&e.to_string());
            return;
        }
        image_name.set(Some(file.name()));
        image_file.set(Some(file));
    };
    #[cfg(not(feature = "hydrate"))]
    let on_image = move |_: leptos::ev::Event| {};

    let on_remove_image = move |_| {
        image_name.set(None);
        current_image.set(None);
        #[cfg(feature = "hydrate")]
        image_file.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let submission = match draft.with_untracked(ProductDraft::validate) {
            Ok(submission) => submission,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };
        saving.set(true);
        let id = product_id.get_untracked();
        let api_client = api_client.clone();
        #[cfg(feature = "hydrate")]
        let image = image_file.get_untracked();
        browser::spawn(async move {
            let fields = submission.form_fields();
            #[cfg(feature = "hydrate")]
            let result = api::save_product(&api_client, id.as_ref(), &fields, image.as_ref()).await;
            #[cfg(not(feature = "hydrate"))]
            let result: Result<(), crate::net::gateway::ApiError> = {
                let _ = (&api_client, &id, &fields);
                Err(crate::net::gateway::ApiError::Unavailable)
            };
            match result {
                Ok(()) => redirect.set(Some(PRODUCTS_PATH.to_owned())),
                Err(e) => {
                    log::warn!("product save failed: {e}");
                    let verb = if id.is_some() { "editar" } else { "criar" };
                    browser::alert(&format!("Erro ao {verb} produto. Verifique os dados e tente novamente."));
                }
            }
            saving.set(false);
        });
    };

    let category_value = move || draft.with(|d| d.categoria_id.as_ref().map(ToString::to_string).unwrap_or_default());

    view! {
        <div class="page">
            <Header show_back=true />
            <main class="page__body">
                <NavBar active=NavTab::Products />
                <h1 class="page__title">{move || if editing() { "EDITAR PRODUTO" } else { "ADICIONAR PRODUTO" }}</h1>
                <Show when=move || error.get().is_some()>
                    <p class="page__status page__status--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || loading.get()>
                    <p class="page__status">"Carregando..."</p>
                </Show>
                <form class="product-form" on:submit=on_submit>
                    <div class="product-form__column">
                        <label class="field">
                            <span class="field__label">"NOME DO PRODUTO"</span>
                            <input
                                type="text"
                                required
                                prop:value=move || draft.with(|d| d.nome.clone())
                                on:input=move |ev| draft.update(|d| d.nome = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"DESCRIÇÃO DO PRODUTO"</span>
                            <textarea
                                rows="6"
                                prop:value=move || draft.with(|d| d.descricao.clone())
                                on:input=move |ev| draft.update(|d| d.descricao = event_target_value(&ev))
                            ></textarea>
                        </label>
                    </div>
                    <div class="product-form__column">
                        <label class="field">
                            <span class="field__label">"VALOR DO PRODUTO"</span>
                            <input
                                type="text"
                                inputmode="decimal"
                                placeholder="0,00"
                                required
                                prop:value=move || draft.with(|d| d.preco.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.preco = sanitize_price_input(&event_target_value(&ev)));
                                }
                            />
                        </label>
                        <div class="field">
                            <span class="field__label">"IMAGEM DO PRODUTO"</span>
                            <input
                                type="file"
                                accept="image/jpeg,image/jpg,image/png,image/gif,image/webp"
                                on:change=on_image
                            />
                            <small>"JPG, PNG, GIF, WEBP (máx. 5MB)"</small>
                            {move || match (image_name.get(), current_image.get()) {
                                (Some(name), _) => {
                                    let prefix = if editing() { "Nova imagem: " } else { "Arquivo selecionado: " };
                                    view! { <p class="field__hint">{format!("{prefix}{name}")}</p> }.into_any()
                                }
                                (None, Some(src)) => view! {
                                    <div class="field__preview">
                                        <img src=src alt="Preview" />
                                        <p class="field__hint">"Imagem atual mantida"</p>
                                    </div>
                                }
                                .into_any(),
                                (None, None) => ().into_any(),
                            }}
                            <Show when=move || image_name.get().is_some() || current_image.get().is_some()>
                                <button type="button" class="btn btn--ghost" on:click=on_remove_image>
                                    "×"
                                </button>
                            </Show>
                        </div>
                        <label class="field">
                            <span class="field__label">"CATEGORIA"</span>
                            <select
                                required
                                prop:value=category_value
                                on:change=move |ev| {
                                    let raw = event_target_value(&ev);
                                    draft.update(|d| d.categoria_id = (!raw.is_empty()).then_some(Id(raw)));
                                }
                            >
                                <option value="">"ESCOLHER CATEGORIA"</option>
                                <For
                                    each=move || categories.get()
                                    key=|c| c.id.clone()
                                    children=|c| view! { <option value=c.id.to_string()>{c.nome}</option> }
                                />
                            </select>
                        </label>
                    </div>
                    <button class="btn btn--primary product-form__submit" type="submit" disabled=move || saving.get()>
                        {move || match (saving.get(), editing()) {
                            (true, true) => "ATUALIZANDO...",
                            (true, false) => "SALVANDO...",
                            (false, true) => "ATUALIZAR",
                            (false, false) => "SALVAR",
                        }}
                    </button>
                </form>
            </main>
        </div>
    }
}
