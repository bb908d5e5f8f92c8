use leptos::prelude::*;

use crate::net::types::OrderItem;

const NO_NOTES: &str = "NENHUMA OBSERVAÇÃO ADICIONADA...";

/// One line of an order: quantity, product and kitchen notes.
#[component]
pub fn OrderItemRow(item: OrderItem) -> impl IntoView {
    let notes = item
        .observacoes
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| NO_NOTES.to_owned());

    view! {
        <li class="order-item">
            <p class="order-item__title">
                <span class="order-item__qty">{format!("{}x", item.quantidade)}</span>
                " "
                {item.produto.nome.to_uppercase()}
            </p>
            <p class="order-item__notes">{notes}</p>
        </li>
    }
}
