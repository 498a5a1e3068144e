//! Errors raised while loading or checking `cpn` configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `COUPON_*` variable failed to parse or merge.
    #[error("invalid configuration source: {0}")]
    Figment(#[from] figment::Error),

    /// `session.dir` is unset and there is no home directory to default to.
    #[error(
        "no session directory: set session.dir (or COUPON_SESSION__DIR); \
         the home directory could not be determined"
    )]
    NoSessionDir,

    /// A value that would only fail later at request time, such as a
    /// `backend.url` without an http(s) scheme.
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
