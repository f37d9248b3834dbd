//! Movie Cache Module
//!
//! Cache-aside layer keeping fresh copies of movies loaded from the repository.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::cache::{CacheEntry, CacheStats};
use crate::error::Result;
use crate::models::{Movie, MovieId};
use crate::repository::MovieRepository;

// == Movie Cache ==
/// TTL-bounded cache in front of a [`MovieRepository`].
///
/// Expiry is checked lazily on access. Stale entries are overwritten on the
/// next lookup of the same id and never swept otherwise, so ids that are no
/// longer looked up keep their memory until the cache is dropped.
#[derive(Debug)]
pub struct MovieCache<R> {
    /// Cached movies keyed by id
    entries: HashMap<MovieId, CacheEntry>,
    /// Source of truth consulted on a miss
    repository: R,
    /// Performance statistics
    stats: CacheStats,
    /// Freshness window applied to every entry
    ttl_seconds: u64,
}

impl<R: MovieRepository> MovieCache<R> {
    // == Constructor ==
    /// Creates an empty cache in front of `repository`.
    ///
    /// # Arguments
    /// * `repository` - Store consulted on a miss or expiry
    /// * `ttl_seconds` - Freshness window shared by all entries
    pub fn new(repository: R, ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            repository,
            stats: CacheStats::new(),
            ttl_seconds,
        }
    }

    // == Get ==
    /// Returns a fresh copy of the movie with the given id.
    ///
    /// A fresh entry is returned without touching the repository. Otherwise
    /// the movie is loaded and the entry replaced. A failed load propagates
    /// and leaves the cache untouched: misses are never cached.
    pub fn get(&mut self, id: MovieId) -> Result<Arc<Movie>> {
        let expired = match self.entries.get(&id) {
            Some(entry) if entry.is_fresh() => {
                debug!("Movie ID {} retrieved from cache", id);
                self.stats.record_hit();
                return Ok(Arc::clone(&entry.movie));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            debug!("Cached movie ID {} expired, reloading", id);
            self.stats.record_expired();
        } else {
            self.stats.record_miss();
        }

        let movie = match self.repository.get_by_id(id) {
            Ok(movie) => Arc::new(movie),
            Err(e) => {
                error!("Movie ID {} not found in DB: {}", id, e);
                return Err(e);
            }
        };
        info!("Movie ID {} loaded from DB", id);

        self.entries
            .insert(id, CacheEntry::new(Arc::clone(&movie), self.ttl_seconds));
        self.stats.set_total_entries(self.entries.len());

        Ok(movie)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Number of entries held, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn repository(&self) -> &R {
        &self.repository
    }
}
