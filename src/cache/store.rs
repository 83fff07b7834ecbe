//! Cache Store Module
//!
//! The raw key-value map behind [`TimedCache`](crate::cache::TimedCache).
//! Holds entries and removes the stale ones; all locking lives one level
//! up, in the handle that wraps this store.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage mapping request keys to timestamped byte payloads.
///
/// The store itself is single-threaded; `TimedCache` wraps it in an
/// `Arc<RwLock<_>>` so writers (including the reaper) get exclusive
/// access and readers can proceed together.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`.
    ///
    /// Last write wins: overwriting an existing key replaces the payload
    /// and resets the entry's creation time. Never fails.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Looks up `key`, copying the payload out if present.
    ///
    /// Expiry is not checked here: an entry that has outlived the TTL but
    /// has not yet been swept by the reaper is still returned. Removal is
    /// solely the reaper's job.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap Expired ==
    /// Removes every entry older than `ttl`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
