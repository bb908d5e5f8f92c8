//! Dashboard card for one table and its latest order.

use leptos::prelude::*;

use crate::net::types::{OrderStatus, TableOverview};
use crate::util::format::pad_table_number;

#[component]
pub fn TableCard(entry: TableOverview) -> impl IntoView {
    let status = entry.ultimo_pedido.status;
    let href = format!("/pedidos/{}", entry.ultimo_pedido.id);

    view! {
        <a
            class=format!("table-card table-card--{}", status.css_modifier())
            class:table-card--muted={status == OrderStatus::Concluido}
            href=href
        >
            <span class="table-card__title">"MESA"</span>
            <span class="table-card__number">{pad_table_number(entry.mesa.numero)}</span>
            <span class="table-card__status">{status.label()}</span>
        </a>
    }
}
