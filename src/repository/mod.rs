//! Movie Repository Module
//!
//! The durable source of truth for movie records. The cache only depends on
//! the single synchronous lookup in [`MovieRepository`].

mod memory;

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Movie, MovieId};

pub use memory::InMemoryMovieRepository;

// == Movie Repository ==
/// Lookup contract consumed by the movie cache.
pub trait MovieRepository: Send + Sync {
    /// Loads a movie by id.
    ///
    /// Fails with `WatchlistError::NotFound` when no record exists.
    fn get_by_id(&self, id: MovieId) -> Result<Movie>;
}

impl<R: MovieRepository + ?Sized> MovieRepository for Arc<R> {
    fn get_by_id(&self, id: MovieId) -> Result<Movie> {
        (**self).get_by_id(id)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Wraps a repository and counts lookups reaching it.
    #[derive(Debug)]
    pub struct CountingRepository<R> {
        inner: R,
        calls: AtomicUsize,
    }

    impl<R> CountingRepository<R> {
        pub fn new(inner: R) -> Self {
            Self {
                inner,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl<R: MovieRepository> MovieRepository for CountingRepository<R> {
        fn get_by_id(&self, id: MovieId) -> Result<Movie> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get_by_id(id)
        }
    }

    /// Catalog with three well-known movies at ids 1, 2 and 3.
    pub fn sample_repository() -> InMemoryMovieRepository {
        InMemoryMovieRepository::with_movies(vec![
            Movie::new(1, "Shrek", Some(2001)).with_actors(["Mike Myers", "Eddie Murphy"]),
            Movie::new(2, "Finding Nemo", Some(2003)),
            Movie::new(3, "Tag", Some(2018)),
        ])
    }
}
