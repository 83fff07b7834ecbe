//! Timed Cache Handle
//!
//! The public face of the cache: a cloneable handle over the shared store,
//! paired at construction with the background reaper that enforces the TTL.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::{spawn_reaper_task, ReaperHandle};

// == Timed Cache ==
/// A concurrency-safe response cache with time-based eviction.
///
/// Keys are request identifiers (typically URLs), values are opaque byte
/// payloads. Each entry records when it was stored; a background reaper
/// deletes entries once they have aged past the TTL fixed at construction.
///
/// The handle is cheap to clone; all clones share one store.
#[derive(Debug, Clone)]
pub struct TimedCache {
    /// Shared entry map, write-locked by `add` and the reaper
    store: Arc<RwLock<CacheStore>>,
}

impl TimedCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// The reaper wakes every `tick` and removes entries older than `ttl`.
    /// A zero `ttl` is accepted: entries are then reaped on the first pass
    /// after insertion.
    ///
    /// Returns the cache handle and the handle controlling the reaper.
    /// Dropping the `ReaperHandle` without calling
    /// [`shutdown`](ReaperHandle::shutdown) stops the reaper as well, so
    /// the task cannot outlive its owner.
    pub fn new(ttl: Duration, tick: Duration) -> (Self, ReaperHandle) {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reaper_task(Arc::clone(&store), ttl, tick);

        (Self { store }, reaper)
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key` with the current time.
    ///
    /// Takes the write lock for the duration of one map insert.
    /// Re-adding an existing key resets its age (last write wins).
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let key = key.into();
        debug!(key = %key, bytes = value.len(), "caching response");

        let mut store = self.store.write().await;
        store.add(key, value);
    }

    // == Get ==
    /// Looks up `key` under the read lock, copying the payload out.
    ///
    /// Returns `None` only if the key is absent at the instant of lookup.
    /// An entry past its TTL but not yet swept is still returned; expiry
    /// is the reaper's responsibility alone.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.read().await;
        store.get(key)
    }

    // == Length ==
    /// Current number of cached entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_round_trip() {
        let (cache, reaper) = TimedCache::new(Duration::from_secs(30), Duration::from_secs(1));

        cache.add("https://example.com", b"testdata".to_vec()).await;

        assert_eq!(
            cache.get("https://example.com").await,
            Some(b"testdata".to_vec())
        );

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_miss_on_unknown_key() {
        let (cache, reaper) = TimedCache::new(Duration::from_secs(30), Duration::from_secs(1));

        assert_eq!(cache.get("never-added").await, None);

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_overwrite() {
        let (cache, reaper) = TimedCache::new(Duration::from_secs(30), Duration::from_secs(1));

        cache.add("key", b"v1".to_vec()).await;
        cache.add("key", b"v2".to_vec()).await;

        assert_eq!(cache.get("key").await, Some(b"v2".to_vec()));
        assert_eq!(cache.len().await, 1);

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_clones_share_one_store() {
        let (cache, reaper) = TimedCache::new(Duration::from_secs(30), Duration::from_secs(1));
        let clone = cache.clone();

        cache.add("key", b"value".to_vec()).await;

        assert_eq!(clone.get("key").await, Some(b"value".to_vec()));

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_entry_reaped_after_ttl() {
        let (cache, reaper) =
            TimedCache::new(Duration::from_millis(100), Duration::from_millis(25));

        cache.add("key", b"value".to_vec()).await;
        assert!(cache.get("key").await.is_some());

        // Poll past TTL + one tick rather than asserting a single instant.
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        loop {
            if cache.get("key").await.is_none() {
                break;
            }
            assert!(
                tokio::time::Instant::now() < deadline,
                "entry was never reaped"
            );
            tokio::time::sleep(Duration::from_millis(25)).await;
        }

        reaper.shutdown().await;
    }
}
