use super::*;
use crate::net::types::{Role, User};

fn user(username: &str, role: Role) -> User {
    User {
        id: 1,
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        first_name: String::new(),
        last_name: String::new(),
        is_staff: false,
        is_superuser: false,
        role,
        linked_organization_id: None,
        linked_center_id: None,
        profile_id: None,
    }
}

/// Apply a sequence of events, checking state invariants after each step.
fn run(mut state: SessionState, events: Vec<SessionEvent>) -> SessionState {
    for event in events {
        let (next, _) = transition(state, event);
        assert_invariants(&next);
        state = next;
    }
    state
}

fn assert_invariants(state: &SessionState) {
    if state.user.is_some() {
        assert!(state.token.is_some(), "user present without token: {state:?}");
    }
    if !state.is_loading() && state.token.is_none() {
        assert!(state.user.is_none(), "settled tokenless state kept a user: {state:?}");
    }
}

#[test]
fn initial_state_is_loading() {
    let state = SessionState::default();
    assert!(state.is_loading());
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
}

#[test]
fn no_stored_token_settles_anonymous_immediately() {
    let (state, effects) = transition(SessionState::default(), SessionEvent::NoStoredToken);
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(effects.is_empty());
}

#[test]
fn token_restore_persists_and_fetches_once() {
    let (state, effects) =
        transition(SessionState::default(), SessionEvent::TokenRestored("abc123".to_owned()));
    assert!(state.is_loading());
    assert_eq!(state.token.as_deref(), Some("abc123"));
    assert_eq!(
        effects,
        vec![
            SessionEffect::PersistToken("abc123".to_owned()),
            SessionEffect::FetchProfile("abc123".to_owned()),
        ]
    );
    let fetches = effects
        .iter()
        .filter(|e| matches!(e, SessionEffect::FetchProfile(_)))
        .count();
    assert_eq!(fetches, 1);
}

#[test]
fn login_success_then_profile_authenticates_with_role_flags() {
    // Scenario: login returns {key:"abc123"}, then /auth/user/ returns an
    // individual-role profile.
    let alice = user("alice", Role::Individual);
    let state = run(
        SessionState::default(),
        vec![
            SessionEvent::LoginRequested,
            SessionEvent::TokenRestored("abc123".to_owned()),
            SessionEvent::ProfileFetched { token: "abc123".to_owned(), user: alice.clone() },
        ],
    );
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("abc123"));
    let role = state.user.as_ref().map(|u| u.role).unwrap_or_default();
    assert!(role.is_individual());
    assert!(!role.is_donor());
    assert!(!role.is_org_admin());
    assert!(!role.is_center_admin());
}

#[test]
fn login_failure_resets_to_anonymous() {
    // Scenario: bad credentials — the store re-throws the error to the form,
    // the machine settles anonymous.
    let (state, effects) = transition(
        SessionState::loading(None),
        SessionEvent::LoginFailed,
    );
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert_eq!(effects, vec![SessionEffect::ClearToken]);
}

#[test]
fn profile_fetch_failure_discards_invalid_token() {
    // Scenario: /auth/user/ returns 401 for an expired token.
    let state = run(
        SessionState::default(),
        vec![SessionEvent::TokenRestored("expired".to_owned())],
    );
    let (state, effects) = transition(
        state,
        SessionEvent::ProfileFetchFailed { token: "expired".to_owned() },
    );
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert_eq!(effects, vec![SessionEffect::ClearToken]);
}

#[test]
fn register_without_token_settles_anonymous_not_loading() {
    let state = run(
        SessionState::default(),
        vec![SessionEvent::LoginRequested, SessionEvent::RegisteredWithoutToken],
    );
    assert!(!state.is_loading());
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert_eq!(state.token, None);
}

#[test]
fn logout_is_idempotent() {
    let bob = user("bob", Role::Donor);
    let authenticated = run(
        SessionState::default(),
        vec![
            SessionEvent::TokenRestored("tok".to_owned()),
            SessionEvent::ProfileFetched { token: "tok".to_owned(), user: bob },
        ],
    );
    let (once, effects_once) = transition(authenticated, SessionEvent::LogoutRequested);
    assert_eq!(once.phase, SessionPhase::Anonymous);
    assert_eq!(effects_once, vec![SessionEffect::ClearToken]);

    let (twice, effects_twice) = transition(once.clone(), SessionEvent::LogoutRequested);
    assert_eq!(twice, once);
    assert!(effects_twice.is_empty(), "second logout should be a no-op");
}

#[test]
fn stale_profile_fetch_after_logout_is_dropped() {
    // Logout races an in-flight profile fetch; the late completion must not
    // resurrect the session.
    let carol = user("carol", Role::CenterAdmin);
    let state = run(
        SessionState::default(),
        vec![
            SessionEvent::TokenRestored("tok".to_owned()),
            SessionEvent::LogoutRequested,
        ],
    );
    let (state, effects) = transition(
        state,
        SessionEvent::ProfileFetched { token: "tok".to_owned(), user: carol },
    );
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert_eq!(state.user, None);
    assert!(effects.is_empty());
}

#[test]
fn profile_fetch_for_superseded_token_is_dropped() {
    // Two rapid logins: the first fetch completes after the second token is
    // installed and must be ignored.
    let old = user("old", Role::Individual);
    let new = user("new", Role::Donor);
    let state = run(
        SessionState::default(),
        vec![
            SessionEvent::TokenRestored("first".to_owned()),
            SessionEvent::TokenRestored("second".to_owned()),
        ],
    );
    let (state, _) = transition(
        state,
        SessionEvent::ProfileFetched { token: "first".to_owned(), user: old },
    );
    assert!(state.is_loading(), "stale completion must not settle the session");
    let (state, _) = transition(
        state,
        SessionEvent::ProfileFetched { token: "second".to_owned(), user: new.clone() },
    );
    assert!(state.is_authenticated());
    assert_eq!(state.user, Some(new));
}

#[test]
fn stale_fetch_failure_for_superseded_token_is_dropped() {
    let state = run(
        SessionState::default(),
        vec![
            SessionEvent::TokenRestored("first".to_owned()),
            SessionEvent::TokenRestored("second".to_owned()),
        ],
    );
    let (state, effects) = transition(
        state,
        SessionEvent::ProfileFetchFailed { token: "first".to_owned() },
    );
    assert!(state.is_loading());
    assert_eq!(state.token.as_deref(), Some("second"));
    assert!(effects.is_empty());
}

#[test]
fn restore_round_trip_reproduces_authenticated_user() {
    // Login, then simulate a page reload: the persisted token is restored
    // and the same profile fetch settles the same authenticated state.
    let dana = user("dana", Role::OrganizationAdmin);
    let first_session = run(
        SessionState::default(),
        vec![
            SessionEvent::LoginRequested,
            SessionEvent::TokenRestored("tok".to_owned()),
            SessionEvent::ProfileFetched { token: "tok".to_owned(), user: dana.clone() },
        ],
    );
    let reloaded = run(
        SessionState::default(),
        vec![
            SessionEvent::TokenRestored("tok".to_owned()),
            SessionEvent::ProfileFetched { token: "tok".to_owned(), user: dana },
        ],
    );
    assert_eq!(first_session, reloaded);
}

#[test]
fn relogin_from_authenticated_goes_through_loading() {
    let erin = user("erin", Role::Individual);
    let state = run(
        SessionState::default(),
        vec![
            SessionEvent::TokenRestored("tok".to_owned()),
            SessionEvent::ProfileFetched { token: "tok".to_owned(), user: erin },
        ],
    );
    let (state, _) = transition(state, SessionEvent::LoginRequested);
    assert!(state.is_loading());
    assert_eq!(state.user, None, "identity is unverified while re-login is in flight");
}
