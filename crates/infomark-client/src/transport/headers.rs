//! Header set construction and merging
//!
//! Header names are kept exactly as written; two names that differ only in
//! case are distinct keys here. Conversion to wire headers happens in the
//! transport.

use std::collections::BTreeMap;

/// Header name to value mapping
pub type Headers = BTreeMap<String, String>;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const USER_AGENT: &str = "user-agent";
pub const ACCEPT: &str = "accept";

/// MIME type of every request body this client sends
pub const APPLICATION_JSON: &str = "application/json";

/// Build the per-call header set.
///
/// Only inputs that are present produce an entry.
pub fn build_headers(
    token: Option<&str>,
    content_type: Option<&str>,
    content_length: Option<usize>,
) -> Headers {
    let mut headers = Headers::new();
    if let Some(content_type) = content_type {
        headers.insert(CONTENT_TYPE.to_string(), content_type.to_string());
    }
    if let Some(length) = content_length {
        headers.insert(CONTENT_LENGTH.to_string(), length.to_string());
    }
    if let Some(token) = token {
        headers.insert(AUTHORIZATION.to_string(), format!("Bearer {}", token));
    }
    headers
}

/// Shallow merge: values from `overrides` win on key collision
pub fn merge_headers(defaults: &Headers, overrides: &Headers) -> Headers {
    let mut merged = defaults.clone();
    merged.extend(
        overrides
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );
    merged
}

/// Headers applied to every request before per-call headers
pub fn default_headers(user_agent: &str) -> Headers {
    let mut headers = Headers::new();
    headers.insert(USER_AGENT.to_string(), user_agent.to_string());
    headers.insert(ACCEPT.to_string(), "*/*".to_string());
    headers
}
