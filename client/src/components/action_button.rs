use leptos::prelude::*;

/// "+ TITLE" button used for add-actions.
#[component]
pub fn ActionButton(title: &'static str, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button class="action-btn" on:click=move |_| on_click.run(())>
            <span class="action-btn__plus">"+"</span>
            {title}
        </button>
    }
}
