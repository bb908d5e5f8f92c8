//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config;
use crate::net::gateway::ApiClient;
use crate::pages::{
    categories::CategoriesPage, dashboard::DashboardPage, history::HistoryPage, login::LoginPage,
    order_details::OrderDetailsPage, product_form::ProductFormPage, products::ProductsPage, tables::TablesPage,
};
use crate::session::SessionHandle;
use crate::util::guard::{ADMIN_ROLES, STAFF_ROLES};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single session and API client for the app and provides both as
/// context. The session is restored from `localStorage` once, after hydration;
/// until then protected routes show a waiting indicator.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::new(config::api_base_url());
    let session = SessionHandle::for_browser(&api);
    provide_context(api);
    provide_context(session);

    // Effects only run in the browser, so SSR always renders the waiting state.
    Effect::new(move || session.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/comanda.css"/>
        <Title text="Comanda"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute roles=STAFF_ROLES><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("pedidos"), ParamSegment("order_id"))
                    view=|| view! { <ProtectedRoute roles=STAFF_ROLES><OrderDetailsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("products")
                    view=|| view! { <ProtectedRoute roles=ADMIN_ROLES><ProductsPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("products"), StaticSegment("add"))
                    view=|| view! { <ProtectedRoute roles=ADMIN_ROLES><ProductFormPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("products"), StaticSegment("edit"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute roles=ADMIN_ROLES><ProductFormPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("categories"), StaticSegment("add"))
                    view=|| view! { <ProtectedRoute roles=ADMIN_ROLES><CategoriesPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("tables"), StaticSegment("add"))
                    view=|| view! { <ProtectedRoute roles=ADMIN_ROLES><TablesPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("history")
                    view=|| view! { <ProtectedRoute roles=ADMIN_ROLES><HistoryPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
