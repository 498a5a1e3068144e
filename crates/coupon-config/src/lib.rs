//! # coupon-config
//!
//! Layered configuration loading for the coupon loyalty client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COUPON_*` prefix, `__` as separator)
//! 2. Project-level `.coupon/config.toml`
//! 3. User-level `~/.config/coupon/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COUPON_BACKEND__URL` -> `backend.url`,
//! `COUPON_SESSION__DIR` -> `session.dir`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use coupon_config::CouponConfig;
//!
//! let config = CouponConfig::load_with_dotenv().expect("config");
//! if config.backend.is_configured() {
//!     println!("backend: {}", config.backend.url);
//! }
//! ```

mod backend;
mod error;
mod general;
mod session;

pub use backend::{BackendConfig, Environment};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CouponConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CouponConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".coupon/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("COUPON_").split("__"))
    }

    /// Reject values that would only fail later at request time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a backend URL or dev proxy
    /// without an `http(s)://` scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.is_configured() && !has_http_scheme(&self.backend.url) {
            return Err(ConfigError::InvalidValue {
                field: "backend.url".into(),
                reason: format!("'{}' must start with http:// or https://", self.backend.url),
            });
        }
        if !has_http_scheme(&self.backend.dev_proxy) {
            return Err(ConfigError::InvalidValue {
                field: "backend.dev_proxy".into(),
                reason: format!(
                    "'{}' must start with http:// or https://",
                    self.backend.dev_proxy
                ),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("coupon").join("config.toml"))
    }
}

fn has_http_scheme(url: &str) -> bool {
    let url = url.trim();
    url.starts_with("http://") || url.starts_with("https://")
}
