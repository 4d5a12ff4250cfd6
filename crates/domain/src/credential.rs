//! Credential types for the remote service

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::{ConfigError, ConfigResult};

/// An opaque credential for the remote service.
///
/// Either a long-lived personal access token (sent as HTTP Basic with an
/// ignored username) or a short-lived bearer token obtained through an
/// external sign-in flow. Bearer tokens are assumed valid at call time;
/// refresh is the sign-in provider's concern, not ours.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Long-lived personal access token, used with Basic authentication.
    PersonalAccessToken(String),
    /// Short-lived sign-in token, used with Bearer authentication.
    Bearer(String),
}

impl Credential {
    /// Creates a personal access token credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when the token is empty
    /// after trimming.
    pub fn personal_access_token(token: impl Into<String>) -> ConfigResult<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(Self::PersonalAccessToken(token))
    }

    /// Creates a bearer token credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when the token is empty
    /// after trimming.
    pub fn bearer(token: impl Into<String>) -> ConfigResult<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(Self::Bearer(token))
    }

    /// Renders the `Authorization` header value for this credential.
    ///
    /// Personal access tokens use `Basic base64(":" + token)`; the
    /// username before the colon is ignored by the service. Bearer tokens
    /// are sent as-is.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::PersonalAccessToken(token) => {
                format!("Basic {}", BASE64.encode(format!(":{token}")))
            }
            Self::Bearer(token) => format!("Bearer {token}"),
        }
    }
}

// Tokens are secrets; keep them out of logs and error chains.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PersonalAccessToken(_) => f.write_str("Credential::PersonalAccessToken(<redacted>)"),
            Self::Bearer(_) => f.write_str("Credential::Bearer(<redacted>)"),
        }
    }
}
