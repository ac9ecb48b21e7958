use super::*;
use crate::net::types::{Role, User};
use crate::state::session::{SessionEvent, SessionState, transition};

fn user(role: Role) -> User {
    User {
        id: 1,
        username: "test".to_owned(),
        email: "test@example.com".to_owned(),
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

fn authenticated(role: Role) -> SessionState {
    let (state, _) = transition(
        SessionState::default(),
        SessionEvent::TokenRestored("tok".to_owned()),
    );
    let (state, _) = transition(
        state,
        SessionEvent::ProfileFetched { token: "tok".to_owned(), user: user(role) },
    );
    state
}

fn anonymous() -> SessionState {
    let (state, _) = transition(SessionState::default(), SessionEvent::NoStoredToken);
    state
}

#[test]
fn loading_session_holds_without_redirect() {
    let outcome = decide(&SessionState::default(), &[], "/dashboard");
    assert_eq!(outcome, GuardOutcome::Loading);
}

#[test]
fn anonymous_session_redirects_to_login_with_remembered_path() {
    let outcome = decide(&anonymous(), &[], "/request");
    assert_eq!(outcome, GuardOutcome::Redirect("/login?from=/request".to_owned()));
}

#[test]
fn expired_token_reset_then_guard_redirects_to_login() {
    // Scenario: profile fetch came back 401 for token "expired"; the session
    // reset to anonymous, so the next guard evaluation sends the user to
    // login remembering where they were headed.
    let (state, _) = transition(
        SessionState::default(),
        SessionEvent::TokenRestored("expired".to_owned()),
    );
    let (state, _) = transition(
        state,
        SessionEvent::ProfileFetchFailed { token: "expired".to_owned() },
    );
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    let outcome = decide(&state, &[], "/dashboard");
    assert_eq!(outcome, GuardOutcome::Redirect("/login?from=/dashboard".to_owned()));
}

#[test]
fn role_mismatch_redirects_away_from_login() {
    // Scenario: a donor hits a region restricted to organization admins.
    let outcome = decide(
        &authenticated(Role::Donor),
        &[Role::OrganizationAdmin],
        "/request",
    );
    let GuardOutcome::Redirect(path) = outcome else {
        panic!("expected a redirect, got {outcome:?}");
    };
    assert!(!path.starts_with("/login"), "role mismatch must not go to login: {path}");
    assert_eq!(path, "/dashboard");
}

#[test]
fn unknown_role_mismatch_redirects_to_unauthorized() {
    let outcome = decide(
        &authenticated(Role::Unknown),
        &[Role::OrganizationAdmin],
        "/request",
    );
    assert_eq!(outcome, GuardOutcome::Redirect("/unauthorized".to_owned()));
}

#[test]
fn matching_role_renders_children() {
    let outcome = decide(
        &authenticated(Role::OrganizationAdmin),
        &[Role::OrganizationAdmin],
        "/request",
    );
    assert_eq!(outcome, GuardOutcome::Render);
}

#[test]
fn any_listed_role_is_accepted() {
    let outcome = decide(
        &authenticated(Role::Individual),
        &[Role::Individual, Role::OrganizationAdmin],
        "/request",
    );
    assert_eq!(outcome, GuardOutcome::Render);
}

#[test]
fn no_restriction_renders_for_any_authenticated_user() {
    let outcome = decide(&authenticated(Role::Donor), &[], "/dashboard");
    assert_eq!(outcome, GuardOutcome::Render);
}

#[test]
fn system_admin_bypasses_role_restrictions() {
    let mut state = authenticated(Role::Unknown);
    if let Some(user) = state.user.as_mut() {
        user.is_staff = true;
    }
    let outcome = decide(&state, &[Role::CenterAdmin], "/request");
    assert_eq!(outcome, GuardOutcome::Render);
}
