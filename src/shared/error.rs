//! Client Error Types
//!
//! Centralized error handling for the delegate layer and the facades on top of it.

use std::fmt;

use crate::domain::delegates::DelegateKind;

/// Errors raised while constructing or driving a delegate.
#[derive(Debug, thiserror::Error)]
pub enum DelegateError {
    #[error("Delegate kind not supported by this factory: {0}")]
    UnsupportedKind(DelegateKind),

    #[error("Factory returned a {actual} delegate for a {expected} request")]
    KindMismatch {
        expected: DelegateKind,
        actual: DelegateKind,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Nothing to update")]
    NothingToUpdate,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Client error type
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Delegate(#[from] DelegateError),

    #[error("Bad request ({code}): {message}")]
    BadRequest { code: i64, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Missing permissions: {0}")]
    MissingPermissions(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited, retry after {retry_after:.3}s")]
    RateLimited { retry_after: f64, global: bool },

    #[error("Server error: HTTP {0}")]
    ServerError(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Fieldless discriminant of [`ClientError`], used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Delegate,
    BadRequest,
    Unauthorized,
    MissingPermissions,
    NotFound,
    RateLimited,
    ServerError,
    Transport,
    Serialization,
}

impl ClientError {
    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Delegate(_) => ErrorKind::Delegate,
            ClientError::BadRequest { .. } => ErrorKind::BadRequest,
            ClientError::Unauthorized(_) => ErrorKind::Unauthorized,
            ClientError::MissingPermissions(_) => ErrorKind::MissingPermissions,
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::RateLimited { .. } => ErrorKind::RateLimited,
            ClientError::ServerError(_) => ErrorKind::ServerError,
            ClientError::Transport(_) => ErrorKind::Transport,
            ClientError::Serialization(_) => ErrorKind::Serialization,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Delegate => "delegate",
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::MissingPermissions => "missing_permissions",
            ErrorKind::NotFound => "not_found",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::ServerError => "server_error",
            ErrorKind::Transport => "transport",
            ErrorKind::Serialization => "serialization",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_wrapped_delegate_error() {
        let err = ClientError::from(DelegateError::NothingToUpdate);
        assert_eq!(err.kind(), ErrorKind::Delegate);
        assert_eq!(err.to_string(), "Nothing to update");
    }

    #[test]
    fn test_unsupported_kind_message_names_the_kind() {
        let err = DelegateError::UnsupportedKind(DelegateKind::RoleUpdater);
        assert_eq!(
            err.to_string(),
            "Delegate kind not supported by this factory: role_updater"
        );
    }

    #[test]
    fn test_rate_limited_display() {
        let err = ClientError::RateLimited {
            retry_after: 1.5,
            global: false,
        };
        assert_eq!(err.to_string(), "Rate limited, retry after 1.500s");
        assert_eq!(err.kind().to_string(), "rate_limited");
    }
}
