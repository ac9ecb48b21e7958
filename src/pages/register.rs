//! Registration page covering all four self-service roles.
//!
//! Depending on backend configuration the response may or may not carry a
//! token; both outcomes are handled — auto-login lands on the dashboard,
//! otherwise we route to the login page.

use leptos::prelude::*;

use crate::net::types::{REGISTRATION_ROLES, Role};
use crate::state::store::SessionStore;

#[cfg(feature = "hydrate")]
fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Individual);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let password2_value = password2.get();
        if username_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            error.set("Username, email, and password are required.".to_owned());
            return;
        }
        if password_value != password2_value {
            error.set("Passwords do not match.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            let data = crate::net::types::RegisterRequest {
                username: username_value,
                email: email_value,
                password: password_value,
                password2: password2_value,
                first_name: optional_field(&first_name.get()),
                last_name: optional_field(&last_name.get()),
                phone_number: optional_field(&phone.get()),
                role: role.get(),
            };
            leptos::task::spawn_local(async move {
                match session.register(data).await {
                    Ok(crate::state::store::RegisterOutcome::AutoLoggedIn) => {
                        navigate(
                            crate::util::nav::DEFAULT_AUTHENTICATED_PATH,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Ok(crate::state::store::RegisterOutcome::LoginRequired) => {
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, username_value, email_value, password_value, password2_value);
            busy.set(false);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create an Account"</h1>
                <form class="register-form" on:submit=on_submit>
                    <label class="register-label">
                        "I am registering as"
                        <select
                            class="register-input"
                            prop:value=move || role.get().wire_name()
                            on:change=move |ev| role.set(Role::from_wire(&event_target_value(&ev)))
                        >
                            {REGISTRATION_ROLES
                                .iter()
                                .map(|r| view! { <option value=r.wire_name()>{r.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        placeholder="Email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="First name (optional)"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Last name (optional)"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="tel"
                        placeholder="Phone number (optional)"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || password2.get()
                        on:input=move |ev| password2.set(event_target_value(&ev))
                    />
                    <button class="register-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="register-message register-message--error">{move || error.get()}</p>
                </Show>
                <p class="register-card__subtitle">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
