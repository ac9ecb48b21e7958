//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"CycleBank"</h1>
                <p>
                    "Menstrual products, where they are needed. Request supplies as an "
                    "individual or organization, donate, or manage a distribution center."
                </p>
                <div class="home-page__actions">
                    <a class="btn btn--primary" href="/login">"Sign In"</a>
                    <a class="btn" href="/register">"Create an Account"</a>
                </div>
            </section>
        </div>
    }
}
