//! Redirect-path helpers shared by the route guard and auth pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard remembers the originally requested location in a `from` query
//! parameter so the login page can return there, and routes role mismatches
//! to a role-appropriate landing instead of the login screen.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::{Role, User};

/// Default landing after login when no location was remembered.
pub const DEFAULT_AUTHENTICATED_PATH: &str = "/dashboard";

/// Login path carrying the originally requested location.
///
/// Paths with characters that would need query escaping are dropped rather
/// than encoded; the login page then falls back to the dashboard.
pub fn login_redirect_path(requested: &str) -> String {
    if is_safe_path(requested) {
        format!("/login?from={requested}")
    } else {
        "/login".to_owned()
    }
}

/// Recover the remembered location from a login-page query string.
pub fn from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "from")
        .map(|(_, value)| value.to_owned())
        .filter(|path| is_safe_path(path))
}

/// Landing page for an authenticated user whose role was refused somewhere:
/// their own dashboard for every recognized role, the unauthorized page when
/// the role could not be determined.
pub fn role_home_path(user: &User) -> &'static str {
    if user.is_system_admin() || user.role != Role::Unknown {
        DEFAULT_AUTHENTICATED_PATH
    } else {
        "/unauthorized"
    }
}

/// Absolute, single-path-segment-safe strings only; anything else would need
/// query-string encoding we deliberately avoid.
fn is_safe_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.is_empty()
        && path
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'/' | b'-' | b'_' | b'.'))
}
