//! Variable group API adapter using reqwest.
//!
//! Implements the `VariableGroupApi` port against the remote service's
//! REST endpoint. All HTTP concerns live here: URL assembly, the
//! authorization header, status-code classification, and body parsing.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use libvar_application::error::{ApiError, ApiResult};
use libvar_application::ports::VariableGroupApi;
use libvar_domain::{ClientConfig, Credential, ProjectIdentity, VariableLibrary};

/// API version sent with every variable group request.
const API_VERSION: &str = "7.0";

/// Wire shape of a successful listing response.
///
/// `value` must be present and an array; anything else is an invalid
/// response. `count` is informational and ignored when absent.
#[derive(Debug, Deserialize)]
struct VariableGroupListResponse {
    value: Vec<VariableLibrary>,
    #[serde(default)]
    #[allow(dead_code)]
    count: Option<u64>,
}

/// Variable group API implementation using reqwest.
///
/// Stateless apart from the connection pool; caching sits above this
/// adapter in the application layer.
pub struct ReqwestVariableGroupApi {
    client: Client,
    base_url: String,
}

impl ReqwestVariableGroupApi {
    /// Creates a new adapter for the service described by `config`.
    ///
    /// Default client configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: `libvar/<version>`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unexpected`] if the underlying client cannot
    /// be created.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("libvar/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates an adapter with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn listing_url(&self, identity: &ProjectIdentity) -> String {
        format!(
            "{}/{}/{}/_apis/distributedtask/variablegroups?api-version={API_VERSION}",
            self.base_url,
            identity.organization(),
            identity.project()
        )
    }

    /// Maps a non-success HTTP status to the matching `ApiError`.
    fn classify_status(status: StatusCode) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::CredentialRejected,
            StatusCode::FORBIDDEN => ApiError::PermissionDenied,
            StatusCode::NOT_FOUND => ApiError::UnknownProject,
            other => ApiError::RequestFailed {
                status: other.as_u16(),
            },
        }
    }

    /// Maps reqwest transport failures to `ApiError`.
    fn map_transport_error(error: &reqwest::Error) -> ApiError {
        if error.is_timeout() {
            return ApiError::Network("request timed out".to_string());
        }
        if error.is_connect() {
            return ApiError::Network(error.to_string());
        }
        ApiError::Unexpected(error.to_string())
    }
}

#[async_trait]
impl VariableGroupApi for ReqwestVariableGroupApi {
    async fn list_variable_groups(
        &self,
        identity: &ProjectIdentity,
        credential: &Credential,
    ) -> ApiResult<Vec<VariableLibrary>> {
        let url = self.listing_url(identity);
        debug!(%url, "requesting variable groups");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, credential.authorization_header())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "variable group request rejected");
            return Err(Self::classify_status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        let listing: VariableGroupListResponse = serde_json::from_slice(&body)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        debug!(count = listing.value.len(), "variable groups received");
        Ok(listing.value)
    }
}
