//! Role-routed dashboard. Wrapped in `RouteGuard`, so an authenticated user
//! is guaranteed once the session settles; this page only decides which
//! role's view to show.

use leptos::prelude::*;

use crate::components::loading::LoadingIndicator;
use crate::net::types::{Role, User};
use crate::state::store::SessionStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_logout = move |_| {
        session.logout();
        #[cfg(feature = "hydrate")]
        navigate("/", leptos_router::NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"CycleBank"</h1>
                <button class="btn" on:click=on_logout>
                    "Sign Out"
                </button>
            </header>
            {move || {
                state
                    .get()
                    .user
                    .map(|user| view! { <RoleDashboard user=user/> }.into_any())
                    .unwrap_or_else(|| view! { <LoadingIndicator/> }.into_any())
            }}
        </div>
    }
}

/// Picks the dashboard view for the user's role. Staff and superusers take
/// priority over any profile role.
#[component]
fn RoleDashboard(user: User) -> impl IntoView {
    if user.is_system_admin() {
        return view! { <AdminDashboard user=user/> }.into_any();
    }
    match user.role {
        Role::OrganizationAdmin => view! { <OrganizationDashboard user=user/> }.into_any(),
        Role::CenterAdmin => view! { <CenterDashboard user=user/> }.into_any(),
        Role::Donor => view! { <DonorDashboard user=user/> }.into_any(),
        Role::Individual => view! { <IndividualDashboard user=user/> }.into_any(),
        Role::Unknown => view! {
            <section class="dashboard-panel">
                <h2>"Account Incomplete"</h2>
                <p>
                    "Your account has no recognized role. Contact support to "
                    "finish setting it up."
                </p>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn AdminDashboard(user: User) -> impl IntoView {
    view! {
        <section class="dashboard-panel">
            <h2>{format!("Platform Administration ({})", user.username)}</h2>
            <p>"Manage organizations, distribution centers, and inventory."</p>
        </section>
    }
}

#[component]
fn OrganizationDashboard(user: User) -> impl IntoView {
    let org = user
        .linked_organization_id
        .map_or_else(|| "your organization".to_owned(), |id| format!("organization #{id}"));
    view! {
        <section class="dashboard-panel">
            <h2>{format!("Welcome, {}", user.username)}</h2>
            <p>{format!("You manage {org}.")}</p>
            <a class="btn btn--primary" href="/request">"Request Products"</a>
        </section>
    }
}

#[component]
fn CenterDashboard(user: User) -> impl IntoView {
    let center = user
        .linked_center_id
        .map_or_else(|| "your distribution center".to_owned(), |id| format!("center #{id}"));
    view! {
        <section class="dashboard-panel">
            <h2>{format!("Welcome, {}", user.username)}</h2>
            <p>{format!("You manage {center}. Review incoming requests and inventory.")}</p>
        </section>
    }
}

#[component]
fn DonorDashboard(user: User) -> impl IntoView {
    view! {
        <section class="dashboard-panel">
            <h2>{format!("Thank you, {}", user.username)}</h2>
            <p>"Your donations keep products moving to the people who need them."</p>
        </section>
    }
}

#[component]
fn IndividualDashboard(user: User) -> impl IntoView {
    view! {
        <section class="dashboard-panel">
            <h2>{format!("Welcome, {}", user.username)}</h2>
            <p>"Request the products you need; pickup details follow by notification."</p>
            <a class="btn btn--primary" href="/request">"Request Products"</a>
        </section>
    }
}
