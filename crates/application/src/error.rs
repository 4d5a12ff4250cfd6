//! Application error types

use thiserror::Error;

/// Errors surfaced by the remote variable group API.
///
/// Each failure mode the caller must distinguish gets its own variant;
/// the host renders the message and may show `status_code` in a details
/// log. Errors are never cached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The service rejected the credential (HTTP 401).
    #[error("authentication failed: the credential was rejected, check your token")]
    CredentialRejected,

    /// The credential lacks permission to read variable groups (HTTP 403).
    #[error("access denied: the credential lacks variable group read permission")]
    PermissionDenied,

    /// The organization or project does not exist (HTTP 404).
    #[error("organization or project not found, check your configuration")]
    UnknownProject,

    /// Any other non-success HTTP status.
    #[error("failed to fetch variable libraries: HTTP status {status}")]
    RequestFailed {
        /// The HTTP status code returned by the service.
        status: u16,
    },

    /// The response body was missing or had a malformed `value` array.
    #[error("invalid response format from the service: {0}")]
    InvalidResponse(String),

    /// A network-level failure: connection refused, DNS failure, timeout.
    #[error("network unreachable: {0}")]
    Network(String),

    /// Any other unexpected failure, preserving the original message.
    #[error("unexpected error while fetching variable libraries: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::CredentialRejected => Some(401),
            Self::PermissionDenied => Some(403),
            Self::UnknownProject => Some(404),
            Self::RequestFailed { status } => Some(*status),
            Self::InvalidResponse(_) | Self::Network(_) | Self::Unexpected(_) => None,
        }
    }
}

/// Result type alias for remote API operations.
pub type ApiResult<T> = Result<T, ApiError>;
