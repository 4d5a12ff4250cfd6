//! Library fetcher with in-memory caching
//!
//! Wraps the [`VariableGroupApi`] port with a per-identity cache so that
//! repeated invocations within the TTL window reuse the last response
//! instead of issuing another network request.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use libvar_domain::{Credential, ProjectIdentity, VariableLibrary};
use tracing::debug;

use crate::error::ApiResult;
use crate::ports::{Clock, VariableGroupApi};

/// One cached fetch result for a single organization/project identity.
#[derive(Debug, Clone)]
struct CacheEntry {
    libraries: Vec<VariableLibrary>,
    fetched_at: DateTime<Utc>,
}

/// Fetches variable libraries through the API port, caching results per
/// identity for a configured time-to-live.
///
/// The fetcher is an explicitly constructed service object owned by the
/// caller for its whole lifetime; there are no process-wide singletons.
/// Single-owner mutation (`&mut self`) keeps the cache lock-free: one
/// fetch per user-triggered action, no concurrent fetches per key.
pub struct LibraryFetcher<A, C> {
    api: A,
    clock: C,
    ttl: TimeDelta,
    cache: HashMap<String, CacheEntry>,
}

impl<A, C> LibraryFetcher<A, C>
where
    A: VariableGroupApi,
    C: Clock,
{
    /// Creates a new fetcher over the given API port and clock.
    ///
    /// `cache_ttl` comes from [`libvar_domain::ClientConfig::cache_ttl`].
    /// A TTL too large for the time representation is clamped to the
    /// maximum, which effectively means "never expires".
    pub fn new(api: A, clock: C, cache_ttl: std::time::Duration) -> Self {
        Self {
            api,
            clock,
            ttl: TimeDelta::from_std(cache_ttl).unwrap_or(TimeDelta::MAX),
            cache: HashMap::new(),
        }
    }

    /// Returns the variable libraries for the given identity.
    ///
    /// Serves from the cache when the entry is younger than the TTL;
    /// otherwise issues one network request through the port and caches
    /// the result. Failed fetches are never cached, so the next call
    /// retries.
    ///
    /// # Errors
    ///
    /// Propagates the [`crate::ApiError`] from the port unchanged.
    pub async fn fetch(
        &mut self,
        identity: &ProjectIdentity,
        credential: &Credential,
    ) -> ApiResult<Vec<VariableLibrary>> {
        let key = identity.cache_key();
        let now = self.clock.now();

        if let Some(entry) = self.cache.get(&key) {
            if now.signed_duration_since(entry.fetched_at) < self.ttl {
                debug!(cache_key = %key, "serving variable libraries from cache");
                return Ok(entry.libraries.clone());
            }
            debug!(cache_key = %key, "cache entry expired, refetching");
        } else {
            debug!(cache_key = %key, "no cache entry, fetching");
        }

        let libraries = self.api.list_variable_groups(identity, credential).await?;

        debug!(
            cache_key = %key,
            count = libraries.len(),
            "caching fetched variable libraries"
        );
        self.cache.insert(
            key,
            CacheEntry {
                libraries: libraries.clone(),
                fetched_at: now,
            },
        );

        Ok(libraries)
    }

    /// Removes all cache entries. Idempotent.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Removes the cache entry for one organization/project, if present.
    /// Idempotent; other identities are unaffected.
    pub fn clear_cache_for_project(&mut self, organization: &str, project: &str) {
        self.cache.remove(&format!("{organization}/{project}"));
    }

    /// Returns the number of cached identities.
    #[must_use]
    pub fn cached_entry_count(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::error::ApiError;

    struct MockApi {
        calls: AtomicUsize,
        responses: Mutex<Vec<ApiResult<Vec<VariableLibrary>>>>,
    }

    impl MockApi {
        fn returning(responses: Vec<ApiResult<Vec<VariableLibrary>>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                responses: Mutex::new(responses),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl VariableGroupApi for &MockApi {
        async fn list_variable_groups(
            &self,
            _identity: &ProjectIdentity,
            _credential: &Credential,
        ) -> ApiResult<Vec<VariableLibrary>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().expect("lock poisoned");
            if responses.is_empty() {
                return Ok(Vec::new());
            }
            responses.remove(0)
        }
    }

    #[derive(Clone)]
    struct MockClock {
        now: std::sync::Arc<Mutex<DateTime<Utc>>>,
    }

    impl MockClock {
        fn at_epoch() -> Self {
            Self {
                now: std::sync::Arc::new(Mutex::new(DateTime::<Utc>::UNIX_EPOCH)),
            }
        }

        fn advance(&self, duration: Duration) {
            let mut now = self.now.lock().expect("lock poisoned");
            *now = *now + TimeDelta::from_std(duration).expect("duration fits");
        }
    }

    impl Clock for MockClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().expect("lock poisoned")
        }
    }

    fn identity() -> ProjectIdentity {
        ProjectIdentity::new("org", "proj").unwrap()
    }

    fn credential() -> Credential {
        Credential::personal_access_token("token").unwrap()
    }

    fn libraries() -> Vec<VariableLibrary> {
        vec![VariableLibrary::new(1, "Staging", [("name", "Alice")])]
    }

    #[tokio::test]
    async fn test_second_fetch_within_ttl_hits_cache() {
        let api = MockApi::returning(vec![Ok(libraries())]);
        let clock = MockClock::at_epoch();
        let mut fetcher = LibraryFetcher::new(&api, clock.clone(), Duration::from_secs(300));

        let first = fetcher.fetch(&identity(), &credential()).await.unwrap();
        clock.advance(Duration::from_secs(299));
        let second = fetcher.fetch(&identity(), &credential()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_after_ttl_refetches() {
        let api = MockApi::returning(vec![Ok(libraries()), Ok(Vec::new())]);
        let clock = MockClock::at_epoch();
        let mut fetcher = LibraryFetcher::new(&api, clock.clone(), Duration::from_secs(300));

        let first = fetcher.fetch(&identity(), &credential()).await.unwrap();
        assert_eq!(first.len(), 1);

        // Exactly at the TTL boundary the entry counts as stale.
        clock.advance(Duration::from_secs(300));
        let second = fetcher.fetch(&identity(), &credential()).await.unwrap();

        assert!(second.is_empty());
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let api = MockApi::returning(vec![Err(ApiError::CredentialRejected), Ok(libraries())]);
        let clock = MockClock::at_epoch();
        let mut fetcher = LibraryFetcher::new(&api, clock, Duration::from_secs(300));

        let first = fetcher.fetch(&identity(), &credential()).await;
        assert_eq!(first, Err(ApiError::CredentialRejected));
        assert_eq!(fetcher.cached_entry_count(), 0);

        // Next call retries immediately and succeeds.
        let second = fetcher.fetch(&identity(), &credential()).await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn test_distinct_identities_do_not_share_entries() {
        let api = MockApi::returning(vec![Ok(libraries()), Ok(Vec::new())]);
        let clock = MockClock::at_epoch();
        let mut fetcher = LibraryFetcher::new(&api, clock, Duration::from_secs(300));

        let alpha = ProjectIdentity::new("org", "alpha").unwrap();
        let beta = ProjectIdentity::new("org", "beta").unwrap();

        let from_alpha = fetcher.fetch(&alpha, &credential()).await.unwrap();
        let from_beta = fetcher.fetch(&beta, &credential()).await.unwrap();

        assert_eq!(from_alpha.len(), 1);
        assert!(from_beta.is_empty());
        assert_eq!(api.call_count(), 2);
        assert_eq!(fetcher.cached_entry_count(), 2);
    }

    #[tokio::test]
    async fn test_clear_cache() {
        let api = MockApi::returning(vec![Ok(libraries()), Ok(libraries())]);
        let clock = MockClock::at_epoch();
        let mut fetcher = LibraryFetcher::new(&api, clock, Duration::from_secs(300));

        fetcher.fetch(&identity(), &credential()).await.unwrap();
        fetcher.clear_cache();
        // Safe to call again with nothing cached.
        fetcher.clear_cache();
        assert_eq!(fetcher.cached_entry_count(), 0);

        fetcher.fetch(&identity(), &credential()).await.unwrap();
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn test_clear_cache_for_project_is_selective() {
        let api = MockApi::returning(vec![Ok(libraries()), Ok(Vec::new()), Ok(libraries())]);
        let clock = MockClock::at_epoch();
        let mut fetcher = LibraryFetcher::new(&api, clock, Duration::from_secs(300));

        let alpha = ProjectIdentity::new("org", "alpha").unwrap();
        let beta = ProjectIdentity::new("org", "beta").unwrap();
        fetcher.fetch(&alpha, &credential()).await.unwrap();
        fetcher.fetch(&beta, &credential()).await.unwrap();

        fetcher.clear_cache_for_project("org", "alpha");
        // Clearing a missing entry is a no-op.
        fetcher.clear_cache_for_project("org", "unknown");
        assert_eq!(fetcher.cached_entry_count(), 1);

        // Alpha refetches, beta still served from cache.
        fetcher.fetch(&alpha, &credential()).await.unwrap();
        fetcher.fetch(&beta, &credential()).await.unwrap();
        assert_eq!(api.call_count(), 3);
    }
}
