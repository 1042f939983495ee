use std::fmt;

use thiserror::Error;

/// Stable classification of a failed gateway call.
///
/// Callers that execute batches treat every kind uniformly; the tag exists
/// so that single-operation callers can branch without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    ValidationFailed,
    AlreadyInState,
    Network,
    Timeout,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotFound => "document not found",
            Self::PermissionDenied => "permission denied",
            Self::ValidationFailed => "field validation failed",
            Self::AlreadyInState => "already in target state",
            Self::Network => "network fault",
            Self::Timeout => "request timed out",
        };
        write!(f, "{s}")
    }
}

/// Classified error returned by a single gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct GatewayError {
    /// Stable error-kind tag.
    pub kind: ErrorKind,
    /// Human-readable message from the store or transport.
    pub message: String,
}

impl GatewayError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    #[must_use]
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PermissionDenied, message)
    }

    #[must_use]
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationFailed, message)
    }

    #[must_use]
    pub fn already_in_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyInState, message)
    }

    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }
}
