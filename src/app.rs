//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::net::http::{ApiClient, DEFAULT_API_BASE};
use crate::net::types::Role;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage,
    request::ProductRequestPage, unauthorized::UnauthorizedPage,
};
use crate::state::store::{ClientConfig, SessionStore};

/// Roles allowed to submit product requests.
const REQUEST_ROLES: &[Role] = &[Role::Individual, Role::OrganizationAdmin];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Owns the session service and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::new(DEFAULT_API_BASE);
    let session = SessionStore::new(api, ClientConfig::default());
    provide_context(session.clone());

    // Startup sequence — effects only run in the browser: CSRF bootstrap,
    // then the stored-token check that settles the initial session.
    Effect::new(move || session.init());

    view! {
        <Stylesheet id="leptos" href="/pkg/cyclebank-client.css"/>
        <Title text="CycleBank"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RouteGuard>
                                <DashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("request")
                    view=|| {
                        view! {
                            <RouteGuard allowed=REQUEST_ROLES>
                                <ProductRequestPage/>
                            </RouteGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
