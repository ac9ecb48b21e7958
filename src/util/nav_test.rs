use super::*;

fn user_with_role(role: Role) -> User {
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

#[test]
fn login_redirect_remembers_requested_path() {
    assert_eq!(login_redirect_path("/request"), "/login?from=/request");
    assert_eq!(
        login_redirect_path("/dashboard"),
        "/login?from=/dashboard"
    );
}

#[test]
fn login_redirect_drops_unsafe_paths() {
    assert_eq!(login_redirect_path("/a?b=c"), "/login");
    assert_eq!(login_redirect_path("not-absolute"), "/login");
    assert_eq!(login_redirect_path("/with space"), "/login");
}

#[test]
fn from_query_round_trips_with_login_redirect() {
    let path = login_redirect_path("/request");
    let query = path.split_once('?').map(|(_, q)| q).unwrap_or("");
    assert_eq!(from_query(query).as_deref(), Some("/request"));
}

#[test]
fn from_query_accepts_leading_question_mark() {
    assert_eq!(from_query("?from=/dashboard").as_deref(), Some("/dashboard"));
}

#[test]
fn from_query_ignores_other_parameters() {
    assert_eq!(
        from_query("next=1&from=/request&x=2").as_deref(),
        Some("/request")
    );
}

#[test]
fn from_query_rejects_unsafe_values() {
    assert_eq!(from_query("from=https://evil.example"), None);
    assert_eq!(from_query("from="), None);
    assert_eq!(from_query(""), None);
}

#[test]
fn role_home_is_dashboard_for_known_roles() {
    for role in [
        Role::Individual,
        Role::OrganizationAdmin,
        Role::CenterAdmin,
        Role::Donor,
    ] {
        assert_eq!(role_home_path(&user_with_role(role)), "/dashboard");
    }
}

#[test]
fn role_home_is_unauthorized_for_unknown_role() {
    assert_eq!(role_home_path(&user_with_role(Role::Unknown)), "/unauthorized");
}

#[test]
fn staff_without_role_still_lands_on_dashboard() {
    let mut user = user_with_role(Role::Unknown);
    user.is_staff = true;
    assert_eq!(role_home_path(&user), "/dashboard");
}
