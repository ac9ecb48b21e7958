//! Request decoration for every backend call.
//!
//! DESIGN
//! ======
//! `ApiClient` is an injectable value rather than a module-global header map:
//! the session store owns one and installs/clears the token through it. All
//! decoration decisions (auth scheme, CSRF echo, URL joining) are pure
//! functions so they test natively.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::cookie;

/// Base URL prefix for all backend calls, matching the dev-server proxy.
pub const DEFAULT_API_BASE: &str = "/api";

/// Header carrying the CSRF cookie echo on mutating requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP verbs the client issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    /// State-mutating verbs must echo the CSRF cookie.
    pub fn mutates(self) -> bool {
        !matches!(self, Self::Get)
    }
}

/// Render the `Authorization` header value for a token.
pub fn auth_header_value(token: &str) -> String {
    format!("Token {token}")
}

/// Join the API base with an endpoint path, normalizing slashes.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Configured HTTP client: base URL plus the currently installed token.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    token: RwSignal<Option<String>>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            token: RwSignal::new(None),
        }
    }

    /// Install the token sent on subsequent requests.
    pub fn install_token(&self, token: &str) {
        self.token.set(Some(token.to_owned()));
    }

    /// Stop sending an `Authorization` header.
    pub fn clear_token(&self) {
        self.token.set(None);
    }

    /// Whether a token is currently installed.
    pub fn has_token(&self) -> bool {
        self.token.with_untracked(Option::is_some)
    }

    #[cfg(feature = "hydrate")]
    fn current_token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Build a decorated request: JSON content type always, auth header when
    /// a token is installed, CSRF echo on mutating verbs.
    #[cfg(feature = "hydrate")]
    pub(crate) fn request(&self, verb: Verb, path: &str) -> gloo_net::http::RequestBuilder {
        let url = join_url(&self.base, path);
        let mut builder = match verb {
            Verb::Get => gloo_net::http::Request::get(&url),
            Verb::Post => gloo_net::http::Request::post(&url),
            Verb::Put => gloo_net::http::Request::put(&url),
            Verb::Patch => gloo_net::http::Request::patch(&url),
            Verb::Delete => gloo_net::http::Request::delete(&url),
        };
        builder = builder.header("Content-Type", "application/json");
        if let Some(token) = self.current_token() {
            builder = builder.header("Authorization", &auth_header_value(&token));
        }
        if verb.mutates() {
            if let Some(csrf) = cookie::csrf_token() {
                builder = builder.header(CSRF_HEADER, &csrf);
            }
        }
        builder
    }
}
