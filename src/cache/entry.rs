//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload with its creation time.
///
/// The payload is opaque to the cache; it is stored and returned as raw
/// bytes. Entries are immutable after insertion; overwriting a key
/// replaces the whole entry, creation time included.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// Instant the entry was inserted
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry timestamped at the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since this entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is expired only when its age is
    /// strictly greater than the TTL. An entry exactly at the TTL is
    /// still live.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
