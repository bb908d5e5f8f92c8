//! Role-gated wrapper around protected screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route's view and applies [`decide`] to the live session on every
//! change, so logout or role loss while a page is open leaves it immediately.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::SessionHandle;
use crate::state::auth::Role;
use crate::util::guard::{ENTRY_PATH, GuardDecision, decide};

#[component]
pub fn ProtectedRoute(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| decide(&session.state(), roles));

    Effect::new(move || {
        if let GuardDecision::Redirect { remember } = decision.get() {
            if remember {
                session.remember_return_to(location.pathname.get_untracked());
            }
            navigate(ENTRY_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Wait => view! {
            <div class="route-wait" role="status" aria-live="polite">
                <span class="spinner"></span>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect { .. } => ().into_any(),
    }
}
