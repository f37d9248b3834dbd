//! Cache Entry Module
//!
//! Defines a cached movie together with its expiry deadline.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::models::Movie;

// == Cache Entry ==
/// A loaded movie and the instant after which it must be reloaded.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached movie
    pub movie: Arc<Movie>,
    /// When the entry was filled from the repository
    pub loaded_at: Instant,
    /// Deadline for serving the entry from cache, None = never expires
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry that stays fresh for `ttl_seconds`.
    ///
    /// A TTL too large to be represented as an `Instant` never expires.
    pub fn new(movie: Arc<Movie>, ttl_seconds: u64) -> Self {
        let now = Instant::now();
        Self {
            movie,
            loaded_at: now,
            expires_at: now.checked_add(Duration::from_secs(ttl_seconds)),
        }
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served.
    ///
    /// Boundary condition: an entry is fresh strictly before its deadline, so
    /// once the TTL has fully elapsed it is stale. A TTL of zero is never fresh.
    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(Instant::now())
    }

    fn is_fresh_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now < deadline,
            None => true,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn movie() -> Arc<Movie> {
        Arc::new(Movie::new(1, "Shrek", Some(2001)))
    }

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(movie(), 60);

        assert_eq!(entry.movie.title, "Shrek");
        assert!(entry.is_fresh());
        assert_eq!(
            entry.expires_at.map(|deadline| deadline - entry.loaded_at),
            Some(Duration::from_secs(60))
        );
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(movie(), 1);

        assert!(entry.is_fresh());

        // Wait for expiration
        sleep(Duration::from_millis(1100));

        assert!(!entry.is_fresh());
    }

    #[test]
    fn test_zero_ttl_is_never_fresh() {
        let entry = CacheEntry::new(movie(), 0);
        assert!(!entry.is_fresh());
    }

    #[test]
    fn test_unrepresentable_ttl_never_expires() {
        let entry = CacheEntry::new(movie(), u64::MAX);

        assert!(entry.expires_at.is_none());
        assert!(entry.is_fresh());
        assert!(entry.is_fresh_at(entry.loaded_at + Duration::from_secs(100 * 365 * 24 * 3600)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(movie(), 5);
        let deadline = entry.expires_at.unwrap();

        assert!(entry.is_fresh_at(entry.loaded_at));
        assert!(!entry.is_fresh_at(deadline), "Entry should be stale at its deadline");
    }
}
