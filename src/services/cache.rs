use crate::models::{Profile, Role};
use crate::services::directory::DirectoryError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Pool fetch failed: {0}")]
    FetchError(#[from] Arc<DirectoryError>),
}

/// In-process cache of candidate pools
///
/// Pools are keyed by role and expire after the configured TTL. Concurrent
/// misses for the same key share a single fetch.
#[derive(Clone)]
pub struct CacheManager {
    pools: moka::future::Cache<String, Arc<Vec<Profile>>>,
    ttl_secs: u64,
}

impl CacheManager {
    /// Create a new cache manager
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let pools = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { pools, ttl_secs }
    }

    /// Get a cached pool, loading it with `fetch` on a miss
    pub async fn get_or_fetch<F, Fut>(&self, role: Role, fetch: F) -> Result<Arc<Vec<Profile>>, CacheError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Profile>, DirectoryError>>,
    {
        let key = CacheKey::pool(role);

        if let Some(pool) = self.pools.get(&key).await {
            tracing::trace!("Cache hit: {}", key);
            return Ok(pool);
        }

        tracing::trace!("Cache miss: {}", key);
        let pool = self
            .pools
            .try_get_with(key, async move { fetch().await.map(Arc::new) })
            .await?;

        Ok(pool)
    }

    /// Get a pool only if it is already cached
    pub async fn get(&self, role: Role) -> Option<Arc<Vec<Profile>>> {
        self.pools.get(&CacheKey::pool(role)).await
    }

    /// Drop the cached pool for one role
    pub async fn invalidate(&self, role: Role) {
        self.pools.invalidate(&CacheKey::pool(role)).await;
    }

    /// Drop every cached pool
    pub async fn invalidate_all(&self) {
        self.pools.invalidate_all();
        self.pools.run_pending_tasks().await;
        tracing::debug!("Invalidated all cached pools");
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.pools.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub ttl_secs: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a candidate pool
    pub fn pool(role: Role) -> String {
        format!("pool:{}", role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn pool() -> Vec<Profile> {
        vec![Profile::mentor("m1", "Mia").with_units(["FIT2004"])]
    }

    #[tokio::test]
    async fn test_fetches_once_then_hits() {
        let cache = CacheManager::new(10, 60);
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let loaded = cache
                .get_or_fetch(Role::Mentor, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(pool())
                })
                .await
                .unwrap();
            assert_eq!(loaded.len(), 1);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_error_is_not_cached() {
        let cache = CacheManager::new(10, 60);

        let result = cache
            .get_or_fetch(Role::Student, || async {
                Err(DirectoryError::ApiError("down".to_string()))
            })
            .await;
        assert!(result.is_err());
        assert!(cache.get(Role::Student).await.is_none());

        let loaded = cache
            .get_or_fetch(Role::Student, || async { Ok(Vec::new()) })
            .await
            .unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let cache = CacheManager::new(10, 60);
        cache
            .get_or_fetch(Role::Mentor, || async { Ok(pool()) })
            .await
            .unwrap();
        assert!(cache.get(Role::Mentor).await.is_some());

        cache.invalidate_all().await;

        assert!(cache.get(Role::Mentor).await.is_none());
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::pool(Role::Mentor), "pool:mentor");
        assert_eq!(CacheKey::pool(Role::Student), "pool:student");
    }
}
