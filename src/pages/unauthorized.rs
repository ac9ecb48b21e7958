//! Access-denied page for authenticated users without a usable role.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Access Denied"</h1>
            <p>
                "Your account does not have access to this area. If you believe "
                "this is a mistake, contact support."
            </p>
            <a class="btn" href="/">"Back to Home"</a>
        </div>
    }
}
