//! HTTP request headers reconstructed from `HTTP_*` metavariables.
//!
//! The gateway folds each request header into the environment by
//! uppercasing it, swapping `-` for `_` and prefixing `HTTP_`
//! (`Accept-Language` becomes `HTTP_ACCEPT_LANGUAGE`). This module
//! reverses that transform for display.

use crate::GatewayEnv;

const HEADER_PREFIX: &str = "HTTP_";

/// Request headers derived from the environment, in scan order.
///
/// Computed fresh per request, never persisted. If two raw keys
/// normalize to the same display name, the last-seen value wins and
/// the first occurrence keeps its position.
#[derive(Debug, Clone, Default)]
pub struct DerivedHeaders {
    headers: Vec<(String, String)>,
}

impl DerivedHeaders {
    /// Scan the environment for `HTTP_*` keys and build the header set.
    pub fn from_env(env: &GatewayEnv) -> Self {
        let mut headers: Vec<(String, String)> = Vec::new();

        for (key, value) in env.iter() {
            let Some(raw) = key.strip_prefix(HEADER_PREFIX) else {
                continue;
            };
            // A bare `HTTP_` key would yield a nameless header; skip it.
            if raw.is_empty() {
                continue;
            }
            let name = display_name(raw);
            match headers.iter_mut().find(|(n, _)| *n == name) {
                Some((_, existing)) => *existing = value.to_string(),
                None => headers.push((name, value.to_string())),
            }
        }

        Self { headers }
    }

    /// Iterate `(display-name, value)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Look up a header by its display name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of derived headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Whether no header-derived keys were found.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// `ACCEPT_LANGUAGE` -> `Accept-Language`.
fn display_name(raw: &str) -> String {
    raw.split('_')
        .map(title_case)
        .collect::<Vec<_>>()
        .join("-")
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}
