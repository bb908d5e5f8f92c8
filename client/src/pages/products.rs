//! Product catalog listing with shortcuts to the management forms.

use leptos::prelude::*;

use crate::components::action_button::ActionButton;
use crate::components::header::Header;
use crate::components::nav_bar::{NavBar, NavTab};
use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::{Id, Product};
use crate::state::remote::Loadable;
use crate::util::browser;
use crate::util::redirect::use_redirect;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let api_client = expect_context::<ApiClient>();
    let redirect = use_redirect();
    let products = RwSignal::new(Loadable::<Vec<Product>>::Loading);
    let image_base = api_client.base_url().to_owned();

    let reload = {
        let api_client = api_client.clone();
        Callback::new(move |()| {
            let api_client = api_client.clone();
            browser::spawn(async move {
                let result = api::fetch_products(&api_client).await;
                products.update(|p| p.refresh_with(result));
            });
        })
    };
    reload.run(());

    // The API exposes no activation endpoint; toggling removes the product.
    let on_toggle = Callback::new(move |id: Id| {
        let api_client = api_client.clone();
        browser::spawn(async move {
            if let Err(e) = api::delete_product(&api_client, &id).await {
                log::warn!("product {id} toggle failed: {e}");
                browser::alert("Erro ao alterar status do produto.");
            }
            reload.run(());
        });
    });

    let go = move |path: &'static str| Callback::new(move |()| redirect.set(Some(path.to_owned())));

    view! {
        <div class="page">
            <Header />
            <main class="page__body">
                <NavBar active=NavTab::Products />
                <div class="page__actions">
                    <ActionButton title="ADICIONAR MESA" on_click=go("/tables/add") />
                    <ActionButton title="ADICIONAR CATEGORIA" on_click=go("/categories/add") />
                    <ActionButton title="ADICIONAR PRODUTO" on_click=go("/products/add") />
                </div>
                {move || match products.get() {
                    Loadable::Loading => view! { <p class="page__status">"Carregando produtos..."</p> }.into_any(),
                    Loadable::Failed(e) => view! {
                        <p class="page__status page__status--error">{format!("Erro ao carregar produtos: {e}")}</p>
                    }
                    .into_any(),
                    Loadable::Loaded(list) if list.is_empty() => view! {
                        <div class="empty-state">
                            <p>"Nenhum produto cadastrado"</p>
                            <ActionButton title="ADICIONAR PRIMEIRO PRODUTO" on_click=go("/products/add") />
                        </div>
                    }
                    .into_any(),
                    Loadable::Loaded(list) => {
                        let image_base = image_base.clone();
                        view! {
                            <div class="product-list">
                                {list
                                    .into_iter()
                                    .map(|product| {
                                        view! {
                                            <ProductCard product=product image_base=image_base.clone() on_toggle=on_toggle />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </main>
        </div>
    }
}
