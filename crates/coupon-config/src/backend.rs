//! Backend connection configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_DEV_PROXY: &str = "http://localhost:3000";

fn default_dev_proxy() -> String {
    DEFAULT_DEV_PROXY.to_string()
}

/// Deployment environment tag supplied at deploy time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Qa,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Qa => "qa",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub const fn is_dev(self) -> bool {
        matches!(self, Self::Dev)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Absolute backend root, e.g. `https://coupons.example.com`. The API
    /// path suffix is appended during normalization.
    #[serde(default)]
    pub url: String,

    /// Environment tag. `dev` routes through the local development proxy.
    #[serde(default)]
    pub env: Environment,

    /// Origin of the local development proxy that serves the `/api` prefix.
    #[serde(default = "default_dev_proxy")]
    pub dev_proxy: String,

    /// Optional overall request timeout. Transport defaults apply when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            env: Environment::default(),
            dev_proxy: default_dev_proxy(),
            timeout_secs: None,
        }
    }
}

impl BackendConfig {
    /// Whether an absolute backend URL has been supplied.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_dev_proxy() {
        let config = BackendConfig::default();
        assert!(!config.is_configured());
        assert!(config.env.is_dev());
        assert_eq!(config.dev_proxy, "http://localhost:3000");
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn whitespace_url_is_not_configured() {
        let config = BackendConfig {
            url: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn environment_display_matches_wire_name() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert!(!Environment::Qa.is_dev());
    }
}
