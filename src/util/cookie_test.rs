use super::*;

#[test]
fn finds_cookie_among_several() {
    let cookies = "sessionid=xyz; csrftoken=abc123; theme=dark";
    assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("abc123"));
}

#[test]
fn finds_single_cookie_without_spaces() {
    assert_eq!(
        cookie_value("csrftoken=tok", CSRF_COOKIE_NAME).as_deref(),
        Some("tok")
    );
}

#[test]
fn missing_cookie_returns_none() {
    assert_eq!(cookie_value("sessionid=xyz", "csrftoken"), None);
    assert_eq!(cookie_value("", "csrftoken"), None);
}

#[test]
fn name_match_is_exact() {
    // "xcsrftoken" must not satisfy a lookup for "csrftoken".
    assert_eq!(cookie_value("xcsrftoken=abc", "csrftoken"), None);
}

#[test]
fn value_may_contain_equals_signs() {
    assert_eq!(
        cookie_value("csrftoken=a=b=c", "csrftoken").as_deref(),
        Some("a=b=c")
    );
}
