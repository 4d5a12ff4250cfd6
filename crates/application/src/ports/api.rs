//! Remote variable group API port

use async_trait::async_trait;
use libvar_domain::{Credential, ProjectIdentity, VariableLibrary};

use crate::error::ApiResult;

/// Port for listing variable groups on the remote service.
///
/// One call issues one network request; caching sits above this port in
/// [`crate::fetcher::LibraryFetcher`], so implementations stay stateless.
#[async_trait]
pub trait VariableGroupApi: Send + Sync {
    /// Lists all variable libraries for the given identity.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] classifying authentication,
    /// authorization, lookup, transport, and response-format failures.
    async fn list_variable_groups(
        &self,
        identity: &ProjectIdentity,
        credential: &Credential,
    ) -> ApiResult<Vec<VariableLibrary>>;
}
