//! Deferred navigation for async handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Spawned tasks cannot hold the router's navigate function, so they write a
//! target path into a signal and an effect owned by the page performs the
//! navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Signal that navigates to its value whenever it becomes `Some`.
pub fn use_redirect() -> RwSignal<Option<String>> {
    let navigate = use_navigate();
    let target = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
    target
}
