//! Catalog entry with edit and active-toggle actions.

use leptos::prelude::*;

use crate::config::resolve_image_url;
use crate::net::types::{Id, Product};
use crate::util::format::format_brl;

#[component]
pub fn ProductCard(product: Product, image_base: String, on_toggle: Callback<Id>) -> impl IntoView {
    let image = product.imagem.as_deref().map(|path| resolve_image_url(&image_base, path));
    let edit_href = format!("/products/edit/{}", product.id);
    let id = product.id.clone();
    let active = product.ativo;
    let alt = product.nome.clone();

    view! {
        <article class="product-card">
            <div class="product-card__image">
                {match image {
                    Some(src) => view! { <img src=src alt=alt /> }.into_any(),
                    None => view! { <span class="product-card__no-image">"SEM IMAGEM"</span> }.into_any(),
                }}
            </div>
            <dl class="product-card__info">
                <dt>"NOME: "</dt>
                <dd>{product.nome.to_uppercase()}</dd>
                <dt>"VALOR: "</dt>
                <dd>{format_brl(product.preco)}</dd>
                <dt>"CATEGORIA: "</dt>
                <dd>{product.categoria.nome.to_uppercase()}</dd>
                <dt>"DESCRIÇÃO: "</dt>
                <dd>{product.descricao.to_uppercase()}</dd>
            </dl>
            <div class="product-card__actions">
                <a class="icon-btn" href=edit_href title="Editar" aria-label="Editar">
                    "✎"
                </a>
                <button
                    class="toggle"
                    class:toggle--on=active
                    title="Ativar/desativar"
                    aria-pressed=active.to_string()
                    on:click=move |_| on_toggle.run(id.clone())
                >
                    <span class="toggle__knob"></span>
                </button>
            </div>
        </article>
    }
}
