//! Cache Module
//!
//! In-memory response cache with time-based eviction. Entries older than
//! the TTL are removed by a background reaper task, not on read.

mod entry;
mod store;
mod timed;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use timed::TimedCache;
