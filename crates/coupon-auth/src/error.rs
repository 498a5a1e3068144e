use thiserror::Error;

/// Failures of the persistent session store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store error: {0}")]
    Io(String),

    #[error("profile serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures of session context operations.
///
/// `Backend` carries the backend's original error untouched so callers can
/// still inspect status codes and display messages.
#[derive(Debug, Error)]
pub enum SessionError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Backend(E),

    /// The login call succeeded at the transport level but the response did
    /// not carry both a token and a user. Never retried.
    #[error("invalid login response: {0}")]
    ContractViolation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl<E> SessionError<E>
where
    E: std::error::Error + 'static,
{
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation(_))
    }

    /// The backend's original error, if this failure came from the backend.
    #[must_use]
    pub const fn backend(&self) -> Option<&E> {
        match self {
            Self::Backend(error) => Some(error),
            _ => None,
        }
    }
}
