//! Organization/project identity

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Identifies the remote organization and project that own the variable
/// libraries.
///
/// Both parts are validated as non-empty at construction, so a value of
/// this type is always usable as a cache key and a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectIdentity {
    organization: String,
    project: String,
}

impl ProjectIdentity {
    /// Creates a new identity from organization and project names.
    ///
    /// Surrounding whitespace is trimmed, matching how the host settings
    /// store hands the values over.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingOrganization`] or
    /// [`ConfigError::MissingProject`] when the respective part is empty
    /// after trimming.
    pub fn new(organization: impl Into<String>, project: impl Into<String>) -> ConfigResult<Self> {
        let organization = organization.into().trim().to_string();
        let project = project.into().trim().to_string();

        if organization.is_empty() {
            return Err(ConfigError::MissingOrganization);
        }
        if project.is_empty() {
            return Err(ConfigError::MissingProject);
        }

        Ok(Self {
            organization,
            project,
        })
    }

    /// Returns the organization name.
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the project name.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the cache key for this identity.
    ///
    /// A key uniquely identifies at most one cache entry at a time;
    /// entries for different identities never share a key.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!("{}/{}", self.organization, self.project)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_identity() {
        let identity = ProjectIdentity::new("mycompany", "MyProject").unwrap();
        assert_eq!(identity.organization(), "mycompany");
        assert_eq!(identity.project(), "MyProject");
    }

    #[test]
    fn test_cache_key() {
        let identity = ProjectIdentity::new("org", "proj").unwrap();
        assert_eq!(identity.cache_key(), "org/proj");
    }

    #[test]
    fn test_trims_whitespace() {
        let identity = ProjectIdentity::new("  org  ", " proj ").unwrap();
        assert_eq!(identity.cache_key(), "org/proj");
    }

    #[test]
    fn test_empty_organization() {
        let result = ProjectIdentity::new("", "proj");
        assert_eq!(result, Err(ConfigError::MissingOrganization));
    }

    #[test]
    fn test_blank_project() {
        let result = ProjectIdentity::new("org", "   ");
        assert_eq!(result, Err(ConfigError::MissingProject));
    }

    #[test]
    fn test_distinct_identities_distinct_keys() {
        let a = ProjectIdentity::new("org", "alpha").unwrap();
        let b = ProjectIdentity::new("org", "beta").unwrap();
        assert_ne!(a.cache_key(), b.cache_key());
    }
}
