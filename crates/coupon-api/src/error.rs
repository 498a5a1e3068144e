//! Gateway error types.

use thiserror::Error;

/// Errors returned by [`crate::ApiClient`] calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401. The session has already been cleared and
    /// the unauthorized signal fired by the time a caller sees this.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Connection, TLS, timeout or other transport failure.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// A request body that could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),

    #[error("invalid backend URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// HTTP status of a backend rejection, if there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Text suitable for showing to a user: the backend's own message when it
    /// sent one.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => message.clone(),
            Self::Transport(error) if error.is_timeout() => "Request timed out".to_string(),
            Self::Transport(_) => "Network error: could not reach the server".to_string(),
            other => other.to_string(),
        }
    }
}
