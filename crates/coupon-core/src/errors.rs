//! Cross-cutting error types.
//!
//! Domain-specific errors (`StoreError`, `SessionError`, `ApiError`) live in
//! their own crates. A unified error is deferred to `coupon-cli`, where all
//! crate errors converge into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any coupon crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
