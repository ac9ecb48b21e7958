//! Product-request form for individuals and organization admins.
//!
//! Loads the product-type list on mount, posts the request, and reports the
//! created request's status. The server identifies the requester from the
//! auth token; nothing identity-related is sent from here.

use leptos::prelude::*;

use crate::state::store::SessionStore;

#[component]
pub fn ProductRequestPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = session.api().clone();

    let product_types = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.fetch_product_types().await.unwrap_or_default() }
        }
    });

    let selected_type = RwSignal::new(String::new());
    let quantity = RwSignal::new("1".to_owned());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Ok(product_type) = selected_type.get().parse::<i64>() else {
            error.set("Select a product type.".to_owned());
            return;
        };
        let Ok(quantity_value) = quantity.get().trim().parse::<u32>() else {
            error.set("Enter a valid quantity.".to_owned());
            return;
        };
        if quantity_value == 0 {
            error.set("Quantity must be at least 1.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let payload = crate::net::types::NewProductRequest { product_type, quantity: quantity_value };
            leptos::task::spawn_local(async move {
                match api.create_product_request(&payload).await {
                    Ok(receipt) => {
                        message.set(format!(
                            "Request submitted. Status: {}. Pickup details will follow.",
                            receipt.status
                        ));
                    }
                    Err(err) => error.set(err.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, product_type, quantity_value);
            busy.set(false);
        }
    };

    view! {
        <div class="request-page">
            <h1>"Request Products"</h1>
            <form class="request-form" on:submit=on_submit>
                <label class="request-label">
                    "Product type"
                    <Suspense fallback=move || {
                        view! { <select class="request-input" disabled></select> }
                    }>
                        <select
                            class="request-input"
                            prop:value=move || selected_type.get()
                            on:change=move |ev| selected_type.set(event_target_value(&ev))
                        >
                            <option value="">"Select a product..."</option>
                            {move || {
                                product_types
                                    .get()
                                    .map(|types| {
                                        types
                                            .into_iter()
                                            .map(|t| {
                                                view! {
                                                    <option value=t.id.to_string()>{t.name}</option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </select>
                    </Suspense>
                </label>
                <label class="request-label">
                    "Quantity (packs/units)"
                    <input
                        class="request-input"
                        type="number"
                        min="1"
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Request" }}
                </button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class="request-message">{move || message.get()}</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="request-message request-message--error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
