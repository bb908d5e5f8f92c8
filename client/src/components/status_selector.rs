use leptos::prelude::*;

use crate::net::types::OrderStatus;

/// Dropdown over every [`OrderStatus`]; emits only actual changes.
#[component]
pub fn StatusSelector(
    #[prop(into)] current: Signal<OrderStatus>,
    #[prop(into)] disabled: Signal<bool>,
    on_change: Callback<OrderStatus>,
) -> impl IntoView {
    let on_select = move |ev: leptos::ev::Event| {
        let Some(next) = OrderStatus::from_wire(&event_target_value(&ev)) else {
            return;
        };
        if next != current.get_untracked() {
            on_change.run(next);
        }
    };

    view! {
        <select
            class=move || format!("status-select status-select--{}", current.get().css_modifier())
            prop:value=move || current.get().as_wire()
            prop:disabled=move || disabled.get()
            on:change=on_select
        >
            {OrderStatus::ALL
                .into_iter()
                .map(|status| view! { <option value=status.as_wire()>{status.label()}</option> })
                .collect_view()}
        </select>
    }
}
