//! Failure classification for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Forms render `ApiError` messages directly, so backend validation bodies
//! are flattened into readable `"field: message"` lists here rather than in
//! every page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every `ApiClient` call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure — no HTTP response was received.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx HTTP response, with a human-readable detail extracted from
    /// the body when it follows the backend's validation shape.
    #[error("{detail}")]
    Api { status: u16, detail: String },
    /// Server-rendering stub path; real calls only exist in the browser.
    #[error("not available during server rendering")]
    Unavailable,
}

impl ApiError {
    /// Wrap a transport error, keeping only its display text.
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    /// Classify a non-2xx response from its status and raw body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = error_detail_from_body(body)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Self::Api { status, detail }
    }

    /// HTTP status for `Api` errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(_) | Self::Unavailable => None,
        }
    }
}

/// Flatten a backend error body into `"field: message; ..."` form.
///
/// The backend reports validation failures as a JSON object mapping field
/// names to message lists (`non_field_errors` and `detail` carry errors not
/// tied to one field). Unrecognized bodies fall back to their raw text.
pub(crate) fn error_detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let map = value.as_object()?;
    if map.is_empty() {
        return None;
    }

    let mut parts = Vec::with_capacity(map.len());
    for (field, messages) in map {
        let label = if field == "non_field_errors" || field == "detail" {
            "Error"
        } else {
            field.as_str()
        };
        let text = match messages {
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_owned))
                .collect::<Vec<_>>()
                .join(", "),
            serde_json::Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        parts.push(format!("{label}: {text}"));
    }
    Some(parts.join("; "))
}
