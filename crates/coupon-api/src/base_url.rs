//! Backend base address resolution.

use coupon_config::BackendConfig;

/// Path prefix every backend route lives under.
pub const API_PREFIX: &str = "/api";

/// Normalize an absolute backend root into the API base.
///
/// Trims whitespace, strips every trailing slash and appends `/api` unless the
/// URL already ends with it. Applying it twice yields the same value.
/// Returns `None` for a blank input.
#[must_use]
pub fn normalize_backend_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.ends_with(API_PREFIX) {
        Some(trimmed.to_string())
    } else {
        Some(format!("{trimmed}{API_PREFIX}"))
    }
}

/// Resolve the base URL the gateway targets for this configuration.
///
/// `dev` always goes through the local development proxy. Any other
/// environment uses the configured backend URL, falling back to the proxy
/// when none is set.
#[must_use]
pub fn resolve_api_root(config: &BackendConfig) -> String {
    let proxied = || format!("{}{API_PREFIX}", config.dev_proxy.trim().trim_end_matches('/'));

    if config.env.is_dev() {
        return proxied();
    }
    normalize_backend_url(&config.url).unwrap_or_else(|| {
        tracing::warn!(env = %config.env, "no backend URL configured; using development proxy");
        proxied()
    })
}
