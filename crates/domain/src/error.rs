//! Configuration error types

use thiserror::Error;

/// Errors raised when the host supplies incomplete or invalid configuration.
///
/// Every variant is recoverable: the host is expected to prompt the user
/// for the missing value and retry, never to crash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The organization name is missing or empty.
    #[error("organization is not configured")]
    MissingOrganization,

    /// The project name is missing or empty.
    #[error("project is not configured")]
    MissingProject,

    /// The credential token is missing or empty.
    #[error("credential is not configured")]
    MissingCredential,
}

/// Result type alias for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
