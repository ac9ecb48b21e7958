//! Session-aware gate for protected routes.
//!
//! DESIGN
//! ======
//! `decide` is the whole policy as a pure function; the component just maps
//! its outcome onto rendering and navigation. While auth is loading nothing
//! redirects; anonymous users go to the login page with the requested
//! location remembered; authenticated users failing a role restriction go to
//! their own landing — never back to login.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingIndicator;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::state::store::SessionStore;
use crate::util::nav::{login_redirect_path, role_home_path};

/// What the guard should do for a given session state and location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Auth is unsettled; show the loading affordance, no redirect.
    Loading,
    /// Access granted; render the guarded children.
    Render,
    /// Access refused; navigate to this path (replacing history).
    Redirect(String),
}

/// Pure guard policy. An empty `allowed` slice means any authenticated user.
pub fn decide(state: &SessionState, allowed: &[Role], requested: &str) -> GuardOutcome {
    if state.is_loading() {
        return GuardOutcome::Loading;
    }
    let Some(user) = state.user.as_ref() else {
        return GuardOutcome::Redirect(login_redirect_path(requested));
    };
    if !allowed.is_empty() {
        let permitted = user.is_system_admin() || allowed.contains(&user.role);
        if !permitted {
            return GuardOutcome::Redirect(role_home_path(user).to_owned());
        }
    }
    GuardOutcome::Render
}

/// Gate wrapping a protected region, optionally restricted to `allowed` roles.
#[component]
pub fn RouteGuard(
    #[prop(optional)] allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();
    let pathname = use_location().pathname;
    let outcome = move || decide(&state.get(), allowed, &pathname.get());

    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardOutcome::Redirect(path) = outcome() {
            navigate(&path, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! {
        {move || match outcome() {
            GuardOutcome::Render => children().into_any(),
            GuardOutcome::Loading | GuardOutcome::Redirect(_) => {
                view! { <LoadingIndicator/> }.into_any()
            }
        }}
    }
}
