//! Loading affordance shown while auth state is unsettled.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator" role="status">
            <span class="loading-indicator__spinner"></span>
            "Loading..."
        </div>
    }
}
