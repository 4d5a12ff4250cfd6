//! Client configuration
//!
//! An explicit typed configuration structure, populated once by the host
//! from its settings provider. No string-keyed settings lookup happens
//! anywhere below this boundary.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default base URL of the remote service.
pub const DEFAULT_BASE_URL: &str = "https://dev.azure.com";

/// Default cache time-to-live (five minutes).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Configuration for the variable library client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the remote service, without a trailing slash.
    pub base_url: String,

    /// How long fetched libraries stay fresh in the in-memory cache.
    pub cache_ttl: Duration,
}

impl ClientConfig {
    /// Creates a configuration with the default service URL and TTL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Overrides the base URL. A trailing slash is stripped so URL
    /// assembly stays uniform.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the cache time-to-live.
    #[must_use]
    pub const fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
