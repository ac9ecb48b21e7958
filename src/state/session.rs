//! Session state machine for the auth lifecycle.
//!
//! DESIGN
//! ======
//! Every auth-affecting occurrence — startup restore, login result, profile
//! fetch completion, logout — is a `SessionEvent` consumed by `transition`,
//! which returns the next state plus the effects to run. Profile-fetch
//! completions carry the token they were issued for and are dropped when the
//! session has since moved on, so a fetch racing a logout (or a second
//! login) can never resurrect stale identity.
//!
//! Invariants upheld by construction:
//! - a user is never present without a token;
//! - a settled session with no token has no user;
//! - at most one profile fetch is issued per token change.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Coarse lifecycle phase of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// An auth-affecting operation is in flight; route guards hold.
    #[default]
    Loading,
    /// Settled with no credential.
    Anonymous,
    /// Settled with a verified profile.
    Authenticated,
}

/// The single authoritative session value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    fn loading(token: Option<String>) -> Self {
        Self { phase: SessionPhase::Loading, token, user: None }
    }

    fn anonymous() -> Self {
        Self { phase: SessionPhase::Anonymous, token: None, user: None }
    }

    fn authenticated(token: String, user: User) -> Self {
        Self {
            phase: SessionPhase::Authenticated,
            token: Some(token),
            user: Some(user),
        }
    }
}

/// One auth-affecting occurrence.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// Login or registration call started.
    LoginRequested,
    /// A token became available: restored from storage, or issued by a
    /// successful login / auto-login registration.
    TokenRestored(String),
    /// Startup check found no persisted token.
    NoStoredToken,
    /// Login or registration call failed.
    LoginFailed,
    /// Registration succeeded without a token; a manual login follows.
    RegisteredWithoutToken,
    /// `GET /auth/user/` succeeded for `token`.
    ProfileFetched { token: String, user: User },
    /// `GET /auth/user/` failed for `token` — the token is treated as
    /// invalid and discarded.
    ProfileFetchFailed { token: String },
    /// User-initiated logout; state clears before the server call.
    LogoutRequested,
}

/// Side effect requested by a transition, executed by the store driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    /// Persist the token and install it on the HTTP client.
    PersistToken(String),
    /// Remove the persisted token and the HTTP client header.
    ClearToken,
    /// Fetch the profile for this token; completion comes back as a
    /// `ProfileFetched` / `ProfileFetchFailed` event.
    FetchProfile(String),
}

/// Apply one event, producing the next state and its effects.
pub fn transition(state: SessionState, event: SessionEvent) -> (SessionState, Vec<SessionEffect>) {
    match event {
        SessionEvent::LoginRequested => (SessionState::loading(state.token), Vec::new()),

        SessionEvent::TokenRestored(token) => (
            SessionState::loading(Some(token.clone())),
            vec![
                SessionEffect::PersistToken(token.clone()),
                SessionEffect::FetchProfile(token),
            ],
        ),

        SessionEvent::NoStoredToken | SessionEvent::RegisteredWithoutToken => {
            (SessionState::anonymous(), Vec::new())
        }

        SessionEvent::LoginFailed => (SessionState::anonymous(), vec![SessionEffect::ClearToken]),

        SessionEvent::ProfileFetched { token, user } => {
            if state.is_loading() && state.token.as_deref() == Some(token.as_str()) {
                (SessionState::authenticated(token, user), Vec::new())
            } else {
                // Stale completion from a superseded token; drop it.
                (state, Vec::new())
            }
        }

        SessionEvent::ProfileFetchFailed { token } => {
            if state.is_loading() && state.token.as_deref() == Some(token.as_str()) {
                (SessionState::anonymous(), vec![SessionEffect::ClearToken])
            } else {
                (state, Vec::new())
            }
        }

        SessionEvent::LogoutRequested => {
            if state.token.is_none() && !state.is_loading() {
                // Already anonymous; nothing to clear.
                (SessionState::anonymous(), Vec::new())
            } else {
                (SessionState::anonymous(), vec![SessionEffect::ClearToken])
            }
        }
    }
}
