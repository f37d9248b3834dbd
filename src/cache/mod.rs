//! Cache Module
//!
//! Provides the in-memory, TTL-bounded movie cache sitting in front of the
//! movie repository.

mod entry;
mod stats;
mod store;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::MovieCache;
