//! Cookie access for the CSRF header echo.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend sets a JavaScript-readable `csrftoken` cookie; mutating
//! requests must echo its value in the `X-CSRFToken` header.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Name of the anti-forgery cookie set by the backend.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Extract a cookie value from a `document.cookie`-style string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
}

/// Read the current CSRF token from `document.cookie`, if present.
pub fn csrf_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let cookies = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())?;
        cookie_value(&cookies, CSRF_COOKIE_NAME)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
