//! Request descriptions built by the call-group modules.

use std::borrow::Cow;

use reqwest::Method;

/// Method, path and query of one backend call, relative to the API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    #[must_use]
    pub fn with_query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Add `clientId` when a non-blank id is given.
    #[must_use]
    pub fn with_client_id(mut self, client_id: Option<&str>) -> Self {
        if let Some(id) = client_id.map(str::trim).filter(|id| !id.is_empty()) {
            self.query.push(("clientId", id.to_string()));
        }
        self
    }

    /// Full URL against `base` (no trailing slash expected).
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{base}{}", self.path);
        for (idx, (key, value)) in self.query.iter().enumerate() {
            url.push(if idx == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}

/// Percent-encode a user-supplied path segment.
#[must_use]
pub fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}
