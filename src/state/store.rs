//! Leptos-facing session service.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created in `App` and provided via context. Pages
//! call its operations; guards and user-aware components read the signal it
//! owns. All state changes flow through `session::transition`, and this
//! driver executes the effects (storage writes, header install, profile
//! fetch) in the order the machine emits them.

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::session::{SessionEffect, SessionEvent, SessionState, transition};
use crate::util::token_storage;

/// Client behavior toggles.
#[derive(Clone, Copy, Debug)]
pub struct ClientConfig {
    /// Adopt a token returned by `POST /auth/registration/`. The backend is
    /// deployed with auto-login enabled; turning this off makes `register`
    /// always settle anonymous so the form redirects to the login page.
    pub auto_login_on_register: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { auto_login_on_register: true }
    }
}

/// How a successful registration concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The response carried a token and the session is logging in with it.
    AutoLoggedIn,
    /// No token was adopted; the caller should route to the login page.
    LoginRequired,
}

/// Injectable session service: authoritative state signal + HTTP client.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    api: ApiClient,
    config: ClientConfig,
}

impl SessionStore {
    pub fn new(api: ApiClient, config: ClientConfig) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            api,
            config,
        }
    }

    /// The authoritative session signal, for guards and pages.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// The underlying HTTP client, for non-auth endpoints.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Startup sequence: CSRF bootstrap first, then the stored-token check.
    /// Runs once from a client-side effect in `App`.
    pub fn init(&self) {
        #[cfg(feature = "hydrate")]
        {
            let store = self.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = store.api.fetch_csrf_cookie().await {
                    // Non-fatal: mutating calls may be rejected until the
                    // cookie exists, surfaced as ordinary HTTP errors.
                    leptos::logging::warn!("csrf bootstrap failed: {err}");
                }
                store.check_auth_status();
            });
        }
    }

    /// Adopt a persisted token if one exists, otherwise settle anonymous.
    pub fn check_auth_status(&self) {
        match token_storage::load() {
            Some(token) => self.apply(SessionEvent::TokenRestored(token)),
            None => self.apply(SessionEvent::NoStoredToken),
        }
    }

    /// Exchange credentials for a token. On success the profile fetch runs
    /// in the background; on failure the session settles anonymous and the
    /// error is returned for the form to render.
    pub async fn login(&self, credentials: LoginRequest) -> Result<(), ApiError> {
        self.apply(SessionEvent::LoginRequested);
        match self.api.login(&credentials).await {
            Ok(token) => {
                self.apply(SessionEvent::TokenRestored(token.key));
                Ok(())
            }
            Err(err) => {
                self.apply(SessionEvent::LoginFailed);
                Err(err)
            }
        }
    }

    /// Create an account. Depending on configuration and the response, this
    /// either behaves like a successful login or leaves the session
    /// anonymous for a manual login.
    pub async fn register(&self, data: RegisterRequest) -> Result<RegisterOutcome, ApiError> {
        self.apply(SessionEvent::LoginRequested);
        match self.api.register(&data).await {
            Ok(resp) => match resp.key {
                Some(key) if self.config.auto_login_on_register => {
                    self.apply(SessionEvent::TokenRestored(key));
                    Ok(RegisterOutcome::AutoLoggedIn)
                }
                _ => {
                    self.apply(SessionEvent::RegisteredWithoutToken);
                    Ok(RegisterOutcome::LoginRequired)
                }
            },
            Err(err) => {
                self.apply(SessionEvent::LoginFailed);
                Err(err)
            }
        }
    }

    /// Optimistic logout: state clears immediately, then a best-effort
    /// server invalidation whose failure is logged and ignored.
    pub fn logout(&self) {
        let had_token = self.state.with_untracked(|s| s.token.is_some());
        self.apply(SessionEvent::LogoutRequested);
        if had_token {
            #[cfg(feature = "hydrate")]
            {
                let api = self.api.clone();
                leptos::task::spawn_local(async move {
                    if let Err(err) = api.logout().await {
                        leptos::logging::warn!("server logout failed: {err}");
                    }
                });
            }
        }
    }

    fn apply(&self, event: SessionEvent) {
        let (next, effects) = transition(self.state.get_untracked(), event);
        self.state.set(next);
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: SessionEffect) {
        match effect {
            SessionEffect::PersistToken(token) => {
                token_storage::save(&token);
                self.api.install_token(&token);
            }
            SessionEffect::ClearToken => {
                token_storage::clear();
                self.api.clear_token();
            }
            SessionEffect::FetchProfile(token) => {
                #[cfg(feature = "hydrate")]
                {
                    let store = self.clone();
                    leptos::task::spawn_local(async move {
                        match store.api.fetch_current_user().await {
                            Ok(user) => {
                                store.apply(SessionEvent::ProfileFetched { token, user });
                            }
                            Err(err) => {
                                // Invalid/expired token: reset silently and
                                // let the route guard redirect to login.
                                leptos::logging::warn!("profile fetch failed: {err}");
                                store.apply(SessionEvent::ProfileFetchFailed { token });
                            }
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = token;
                }
            }
        }
    }
}
