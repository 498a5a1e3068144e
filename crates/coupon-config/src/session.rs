//! Session persistence configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding the `token` and `user` entries.
    /// Empty means `~/.coupon/session`.
    #[serde(default)]
    pub dir: String,
}

impl SessionConfig {
    /// Resolve the session directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoSessionDir` if no directory is configured and
    /// the home directory cannot be determined.
    pub fn resolve_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.dir.trim().is_empty() {
            return Ok(PathBuf::from(self.dir.trim()));
        }
        dirs::home_dir()
            .map(|home| home.join(".coupon").join("session"))
            .ok_or(ConfigError::NoSessionDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = SessionConfig {
            dir: "/tmp/coupon-session".into(),
        };
        assert_eq!(
            config.resolve_dir().expect("explicit dir"),
            PathBuf::from("/tmp/coupon-session")
        );
    }

    #[test]
    fn default_dir_is_under_home() {
        let config = SessionConfig::default();
        if let Ok(path) = config.resolve_dir() {
            assert!(path.ends_with(".coupon/session"));
        }
    }
}
