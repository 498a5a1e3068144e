//! # coupon-api
//!
//! REST gateway client for the coupon loyalty backend.
//!
//! One [`ApiClient`] wraps one HTTP connection pool. Every call reads the
//! bearer credential from the session store, and every 401 clears the store
//! and fires the [`UnauthorizedSignal`] before the error reaches the caller.
//!
//! Call groups:
//! - [`auth`]: login, "who am I", registration, password change
//! - [`campaigns`]: list, fetch, create, update
//! - [`coupons`]: customer lookup, listing, redemption
//! - [`clients`]: tenant management
//! - [`users`]: staff accounts per tenant
//! - [`analytics`]: dashboard and redemption logs
//! - [`dining`]: dining visit submission and CSV export

pub mod analytics;
pub mod auth;
pub mod base_url;
pub mod campaigns;
pub mod clients;
pub mod coupons;
pub mod dining;
pub mod users;

mod endpoint;
mod error;
mod http;

pub use base_url::{normalize_backend_url, resolve_api_root};
pub use endpoint::Endpoint;
pub use error::ApiError;

use std::sync::Arc;
use std::time::Duration;

use coupon_auth::{SessionStore, UnauthorizedSignal};
use coupon_config::BackendConfig;

const USER_AGENT: &str = concat!("coupon-cli/", env!("CARGO_PKG_VERSION"));

/// HTTP gateway to the backend. Cheap to clone; clones share the connection
/// pool, the session store and the signal.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    signal: UnauthorizedSignal,
}

impl ApiClient {
    /// Create a client targeting an already-resolved API base.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// http(s) URL, or [`ApiError::Transport`] if the HTTP client cannot be
    /// built.
    pub fn new(
        base_url: impl Into<String>,
        store: Arc<dyn SessionStore>,
        signal: UnauthorizedSignal,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            store,
            signal,
        })
    }

    /// Create a client from backend configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(
        config: &BackendConfig,
        store: Arc<dyn SessionStore>,
        signal: UnauthorizedSignal,
    ) -> Result<Self, ApiError> {
        let base_url = resolve_api_root(config);
        tracing::debug!(%base_url, env = %config.env, "api client configured");
        Self::new(
            base_url,
            store,
            signal,
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn signal(&self) -> &UnauthorizedSignal {
        &self.signal
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }
}
